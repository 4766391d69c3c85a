//! Projects blended team ratings into expected-goal values for a fixture.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::form::FormRating;

#[derive(Debug, Error)]
#[error("no rating available for {team}")]
pub struct MissingRatingError {
    pub team: String,
}

/// The home-field-advantage adjustment applied to the home side's expected
/// goals. Disabled by default: the scalar derived by the rating calculator is
/// reported, not silently baked into the projection, and is only applied when
/// a caller opts in.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HomeAdvantage {
    #[default]
    Disabled,
    /// Added to the home side's expected goals after the rating interplay.
    Additive(f64),
}
impl HomeAdvantage {
    pub fn apply(&self, home_rate: f64) -> f64 {
        match self {
            HomeAdvantage::Disabled => home_rate,
            HomeAdvantage::Additive(boost) => home_rate + boost,
        }
    }
}

/// Expected-goal rates for one fixture: the Poisson rate parameters for each
/// side's goal count.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureProjection {
    pub home_team: String,
    pub away_team: String,
    pub home_rate: f64,
    pub away_rate: f64,
}

/// Combines the blended ratings of the two sides: an attacker's scoring rate
/// is multiplied by the opponent's conceding rate. Fails eagerly when either
/// team has no rating; defaulting here would silently invalidate the forecast.
pub fn project(
    home_team: &str,
    away_team: &str,
    form: &FxHashMap<String, FormRating>,
    home_advantage: HomeAdvantage,
) -> Result<FixtureProjection, MissingRatingError> {
    let home = rating_of(form, home_team)?;
    let away = rating_of(form, away_team)?;
    Ok(FixtureProjection {
        home_team: home_team.into(),
        away_team: away_team.into(),
        home_rate: home_advantage.apply(home.attack * away.defense),
        away_rate: away.attack * home.defense,
    })
}

fn rating_of<'a>(
    form: &'a FxHashMap<String, FormRating>,
    team: &str,
) -> Result<&'a FormRating, MissingRatingError> {
    form.get(team).ok_or_else(|| MissingRatingError {
        team: team.into(),
    })
}
