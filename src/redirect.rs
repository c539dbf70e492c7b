use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no browsing context available")]
    NoWindow,
    #[error("the new browsing context was blocked")]
    Blocked,
    #[error("navigation failed: {0}")]
    Failed(String),
}

/// Hands a fully built external URL to the host environment.
///
/// The form controller only ever talks to this trait, so message
/// composition can be exercised without a browser.
pub trait ExternalNavigator {
    fn open(&self, url: &str) -> Result<(), NavigationError>;
}

impl<N: ExternalNavigator + ?Sized> ExternalNavigator for &N {
    fn open(&self, url: &str) -> Result<(), NavigationError> {
        (**self).open(url)
    }
}
