use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    MissingFile(String),
    IoError(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MissingFile(path) => write!(f, "File {path} does not exist"),
            Self::IoError(why) => write!(f, "{why}"),
        }
    }
}

pub type CliResult<T> = Result<T, ErrorKind>;

#[cfg(test)]
mod test {
    use super::ErrorKind;

    #[test]
    fn error_messages() {
        let err = ErrorKind::MissingFile("\"a.txt\"".into());
        assert_eq!(err.to_string(), "File \"a.txt\" does not exist");

        let err = ErrorKind::IoError("Failed to read \"b.txt\": denied".into());
        assert_eq!(err.to_string(), "Failed to read \"b.txt\": denied");
    }
}
