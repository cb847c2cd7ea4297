use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum CollectionError {
    #[error("Cannot {operation} from an empty container")]
    Empty { operation: &'static str },
}
