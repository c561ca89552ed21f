#[derive(thiserror::Error, Debug, serde::Deserialize, serde::Serialize)]
pub enum Error {
    #[error("No version strings given on the command line or stdin")]
    NoInput,

    #[error("{current} is older than {latest}")]
    OutOfDate { current: String, latest: String },
}
