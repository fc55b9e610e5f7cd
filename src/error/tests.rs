//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod sleeper_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = SleeperError::from(json_error);

        match err {
            SleeperError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = SleeperError::from(io_error);

        match err {
            SleeperError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_decode_error_names_url() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = SleeperError::Decode {
            url: "https://api.sleeper.app/v1/league/1".to_string(),
            source,
        };

        let message = err.to_string();
        assert!(message.contains("https://api.sleeper.app/v1/league/1"));
        assert!(message.contains("not valid JSON"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_transport_error_chains_cause() {
        let err = SleeperError::Transport {
            url: "https://api.sleeper.app/v1/user/u1".to_string(),
            source: crate::TransportError::Unavailable("connection refused".to_string()),
        };

        assert_eq!(
            err.to_string(),
            "Request to https://api.sleeper.app/v1/user/u1 got no response after retries: \
             connection refused"
        );
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = SleeperError::OutOfRange {
            season: 2030,
            league_create_season: 2025,
        };

        let message = err.to_string();
        assert!(message.contains("2030"));
        assert!(message.contains("has not started yet"));
    }

    #[test]
    fn test_construction_helper() {
        let err = SleeperError::construction("state endpoint returned null");

        match &err {
            SleeperError::Construction { message } => {
                assert_eq!(message, "state endpoint returned null");
            }
            _ => panic!("Expected Construction error variant"),
        }
        assert!(err.to_string().starts_with("Failed to get NFL state"));
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = SleeperError::MissingLeagueId {
            env_var: "SLEEPER_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("SLEEPER_LEAGUE_ID"));
    }

    #[test]
    fn test_status_error_display() {
        let error = SleeperError::Status {
            url: "https://api.sleeper.app/v1/user/abc".to_string(),
            status: 503,
        };

        assert_eq!(
            error.to_string(),
            "Request to https://api.sleeper.app/v1/user/abc failed with status 503 after retries"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let error = SleeperError::InvalidSeason("abc".parse::<u16>().unwrap_err());
        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("InvalidSeason"));
    }
}
