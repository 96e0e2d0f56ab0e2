use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown assembly: {0}")]
    UnknownAssembly(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
