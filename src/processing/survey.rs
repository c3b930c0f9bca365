//! Survey orchestration over named observation sites
//!
//! A survey holds a map from site name to observation plus named groups
//! of sites observed toward the same landmark. Running the survey
//! estimates a height for every pair of sites within each group, adds
//! the configured observer eye height, and aggregates all pair
//! estimates into a single reported value with uncertainty.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::algorithms::aggregate::aggregate;
use crate::algorithms::height::estimate_height;
use crate::core::types::{Measurement, Observation};
use crate::utils::config::SurveyConfig;
use crate::validation::data::ObservationValidator;
use crate::validation::error::SurveyError;

/// A named group of sites whose observations share a landmark sighting
#[derive(Debug, Clone, Serialize)]
pub struct PairGroup {
    pub name: String,
    pub members: Vec<String>,
}

/// Height estimate produced by one site pair, eye height included
#[derive(Debug, Clone, Serialize)]
pub struct PairEstimate {
    pub group: String,
    pub site_a: String,
    pub site_b: String,
    pub height_m: f64,
}

/// Result of a survey run: every pair estimate plus the aggregate
#[derive(Debug, Clone, Serialize)]
pub struct SurveyReport {
    pub pairs: Vec<PairEstimate>,
    pub result: Measurement,
}

/// Collection of observation sites and pair groups for one landmark
#[derive(Debug, Clone, Default)]
pub struct Survey {
    sites: BTreeMap<String, Observation>,
    groups: Vec<PairGroup>,
}

impl Survey {
    /// Create an empty survey
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a survey from an existing site map
    ///
    /// This is the crate's entry point for externally loaded data: the
    /// caller supplies a mapping from unique site name to observation.
    pub fn from_sites(sites: BTreeMap<String, Observation>) -> Self {
        Self {
            sites,
            groups: Vec::new(),
        }
    }

    /// Add a named observation site
    ///
    /// Site names are unique keys; adding a name twice fails with
    /// [`SurveyError::DuplicateSite`].
    pub fn add_site(
        &mut self,
        name: impl Into<String>,
        observation: Observation,
    ) -> Result<(), SurveyError> {
        let name = name.into();
        if self.sites.contains_key(&name) {
            return Err(SurveyError::DuplicateSite { name });
        }
        self.sites.insert(name, observation);
        Ok(())
    }

    /// Add a named group of sites to pair up during the run
    pub fn add_group(&mut self, name: impl Into<String>, members: &[&str]) {
        self.groups.push(PairGroup {
            name: name.into(),
            members: members.iter().map(|m| m.to_string()).collect(),
        });
    }

    /// Look up a site's observation by name
    pub fn site(&self, name: &str) -> Option<&Observation> {
        self.sites.get(name)
    }

    /// All sites in the survey, keyed by name
    pub fn sites(&self) -> &BTreeMap<String, Observation> {
        &self.sites
    }

    /// Estimate heights for every pair in every group and aggregate
    ///
    /// With no groups defined, all sites form one implicit group. Every
    /// participating observation is checked against the configured
    /// validation limits, and site pairs closer than the configured
    /// minimum separation are rejected before estimation. Each pair
    /// estimate includes the configured eye-height offset, so the
    /// reported value is height above ground rather than above eye
    /// level. A degenerate pair aborts the run unless
    /// `config.skip_degenerate_pairs` is set, in which case the pair is
    /// dropped and the remaining estimates aggregate as usual.
    pub fn run(&self, config: &SurveyConfig) -> Result<SurveyReport, SurveyError> {
        let validator = ObservationValidator::with_config(config.validation.clone());

        let implicit;
        let groups: &[PairGroup] = if self.groups.is_empty() {
            implicit = [PairGroup {
                name: "all".to_string(),
                members: self.sites.keys().cloned().collect(),
            }];
            &implicit
        } else {
            &self.groups
        };

        let mut pairs = Vec::new();
        for group in groups {
            let mut members = Vec::with_capacity(group.members.len());
            for name in &group.members {
                let observation =
                    self.sites
                        .get(name)
                        .ok_or_else(|| SurveyError::UnknownSite {
                            group: group.name.clone(),
                            name: name.clone(),
                        })?;
                validator.validate(observation)?;
                members.push((name, observation));
            }

            if members.len() < 2 {
                return Err(SurveyError::InsufficientObservations {
                    group: group.name.clone(),
                    available: members.len(),
                    required: 2,
                });
            }

            for i in 0..members.len() {
                for j in (i + 1)..members.len() {
                    let (name_a, obs_a) = members[i];
                    let (name_b, obs_b) = members[j];

                    let minimum_m = config.validation.min_pair_separation_m;
                    if minimum_m > 0.0 {
                        let separation_m = obs_a.distance_to(obs_b);
                        if separation_m < minimum_m {
                            return Err(SurveyError::SitesTooClose {
                                site_a: name_a.clone(),
                                site_b: name_b.clone(),
                                separation_m,
                                minimum_m,
                            });
                        }
                    }

                    match estimate_height(obs_a, obs_b) {
                        Ok(height) => pairs.push(PairEstimate {
                            group: group.name.clone(),
                            site_a: name_a.clone(),
                            site_b: name_b.clone(),
                            height_m: height + config.eye_height_m,
                        }),
                        Err(SurveyError::IndeterminateGeometry { .. })
                            if config.skip_degenerate_pairs => {}
                        Err(err) => return Err(err),
                    }
                }
            }
        }

        let estimates: Vec<f64> = pairs.iter().map(|p| p.height_m).collect();
        let result = aggregate(&estimates)?;

        Ok(SurveyReport { pairs, result })
    }
}
