use crate::extension::DEFAULT_KEY;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no device resolved for this request; run the resolver before reading `{key}`", key = DEFAULT_KEY)]
    DeviceNotResolved,
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    YAML(#[from] serde_yaml::Error),
    #[error(transparent)]
    AhoCorasick(#[from] aho_corasick::BuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
