//! Console rendering of forecasts as Stanza tables.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Cell, Col, Row, Table};

use crate::forecast::Forecast;

/// One row per forecast fixture: the projected rates and the derived outcome
/// probabilities.
pub fn summary_table(forecasts: &[Forecast]) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(24)).with(HAlign::Left)),
            Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(8))
                    .with(HAlign::Right),
            ),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(8))
                    .with(HAlign::Right),
            ),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![
                "Round".into(),
                "Fixture".into(),
                "xG home".into(),
                "xG away".into(),
                "Home".into(),
                "Draw".into(),
                "Away".into(),
            ],
        ));

    for forecast in forecasts {
        let round = forecast
            .fixture
            .round
            .map(|round| round.to_string())
            .unwrap_or_default();
        table.push_row(Row::new(
            Styles::default(),
            vec![
                round.into(),
                format!("{}", forecast.fixture).into(),
                format!("{:.2}", forecast.projection.home_rate).into(),
                format!("{:.2}", forecast.projection.away_rate).into(),
                format!("{:.1}%", forecast.home_win * 100.0).into(),
                format!("{:.1}%", forecast.draw * 100.0).into(),
                format!("{:.1}%", forecast.away_win * 100.0).into(),
            ],
        ));
    }
    table
}

/// The scoreline grid for one fixture, truncated to `goals` per side, with
/// percentage cells. Rows are home goals, columns away goals.
pub fn scoregrid_table(forecast: &Forecast, goals: usize) -> Table {
    let display = forecast.scoregrid.truncated(goals);
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default()
                    .with(Separator(true))
                    .with(MinWidth(10))
                    .with(HAlign::Left),
            )];
            for _ in 0..display.cols() {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(7)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            {
                let mut header_cells: Vec<Cell> =
                    vec![format!("{}", forecast.fixture).into()];
                for away_goals in 0..display.cols() {
                    header_cells.push(format!("{away_goals}").into());
                }
                header_cells
            },
        ));

    for home_goals in 0..display.rows() {
        let mut row_cells: Vec<Cell> = vec![format!("{home_goals}").into()];
        for away_goals in 0..display.cols() {
            row_cells.push(format!("{:.1}%", display[(home_goals, away_goals)] * 100.0).into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}
