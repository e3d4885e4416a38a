use std::fmt::Formatter;

#[derive(Debug)]
pub enum GeocodeError {
    /// Transport, HTTP or quota error while talking to the provider
    Transport(Box<dyn std::fmt::Debug + Send>),
    /// The provider responded with something other than a candidate list
    InvalidResponse(Box<dyn std::fmt::Debug + Send>),
    /// The provider returned no usable candidate for the query
    NoMatch
}

impl std::fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            GeocodeError::Transport(inner) => {
                format!("provider transport error: {:?}", inner)
            },
            GeocodeError::InvalidResponse(inner) => {
                format!("invalid provider response: {:?}", inner)
            },
            GeocodeError::NoMatch => {
                "no matching location".into()
            }
        };
        write!(f, "Geocode error: {}", msg)
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(error: reqwest::Error) -> Self {
        GeocodeError::Transport(Box::new(error))
    }
}
