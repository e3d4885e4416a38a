use serde::Deserialize;

use crate::geocode::error::GeocodeError;
use crate::geocode::{GeocodeResult, Geocoder};

const FIND_CANDIDATES_PATH: &str = "/findAddressCandidates";

// Candidates are scored 0-100; below this the match is too loose to trust
// its coordinates.
const MIN_CANDIDATE_SCORE: f32 = 75.0;

/// Client for an ArcGIS-style single line geocoding endpoint.
pub struct ArcGisGeocoder {
    client: reqwest::blocking::Client,
    base_url: String
}

#[derive(Debug, Deserialize)]
struct CandidateList {
    candidates: Vec<Candidate>
}

#[derive(Debug, Deserialize)]
struct Candidate {
    address: String,
    location: Location,
    score: f32
}

#[derive(Debug, Deserialize)]
struct Location {
    x: f64,
    y: f64
}

impl ArcGisGeocoder {
    pub fn new(base_url: String) -> Self {
        ArcGisGeocoder {
            client: reqwest::blocking::Client::new(),
            base_url
        }
    }
}

impl Geocoder for ArcGisGeocoder {
    fn geocode(&self, query: &str) -> Result<GeocodeResult, GeocodeError> {
        let url = format!("{}{}", self.base_url, FIND_CANDIDATES_PATH);
        let response = self.client
            .get(&url)
            .query(&[
                ("f", "json"),
                ("outFields", "Match_addr"),
                ("maxLocations", "1"),
                ("singleLine", query)
            ])
            .send()?
            .error_for_status()?;

        // Error replies (bad token, quota) come back without a candidate
        // list and fail to decode here.
        let list: CandidateList = response
            .json()
            .map_err(|err| GeocodeError::InvalidResponse(Box::new(err)))?;

        best_match(list).ok_or(GeocodeError::NoMatch)
    }
}

fn best_match(list: CandidateList) -> Option<GeocodeResult> {
    list.candidates
        .into_iter()
        .find(|candidate| candidate.score >= MIN_CANDIDATE_SCORE)
        .map(|candidate| GeocodeResult {
            match_addr: candidate.address,
            lat: candidate.location.y,
            lon: candidate.location.x
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_candidate_response() {
        let body = r#"{
            "spatialReference": {"wkid": 4326},
            "candidates": [
                {
                    "address": "8983 Potter Rd, Des Plaines, Illinois, 60016",
                    "location": {"x": -87.92401, "y": 42.06073},
                    "score": 100,
                    "attributes": {"Match_addr": "8983 Potter Rd, Des Plaines, Illinois, 60016"}
                }
            ]
        }"#;

        let list: CandidateList = serde_json::from_str(body).unwrap();
        let located = best_match(list).unwrap();
        assert_eq!(located.match_addr, "8983 Potter Rd, Des Plaines, Illinois, 60016");
        assert!((located.lat - 42.06073).abs() < 1e-9);
        assert!((located.lon + 87.92401).abs() < 1e-9);
    }

    #[test]
    fn test_no_match_on_empty_candidate_list() {
        let list: CandidateList = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(best_match(list).is_none());
    }

    #[test]
    fn test_rejects_low_scoring_candidates() {
        let list = CandidateList {
            candidates: vec![
                Candidate {
                    address: "Springfield, Illinois".to_string(),
                    location: Location { x: -89.65, y: 39.78 },
                    score: 60.0
                }
            ]
        };
        assert!(best_match(list).is_none());
    }
}
