use plotly::common::{Line, Marker, Mode};
use plotly::layout::{Axis, Layout};
use plotly::{Bar, Plot, Scatter};

use crate::views::WinLoss;

pub const VENUE_BAR_COLOR: &str = "#1f77b4";
pub const TOP_SCORER_PALETTE: [&str; 5] = ["#FFB6C1", "#FFDAB9", "#90EE90", "#E6E6FA", "#ADD8E6"];
pub const WIN_LOSS_COLORS: [&str; 2] = ["#FF6347", "#4682B4"];

// Sampled from matplotlib's viridis.
const VIRIDIS: [&str; 10] = [
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e", "#1f9e89", "#35b779", "#6ece58",
    "#b5de2b", "#fde725",
];

/// Spread `n` colours evenly across the viridis ramp.
pub fn viridis(n: usize) -> Vec<&'static str> {
    match n {
        0 => Vec::new(),
        1 => vec![VIRIDIS[0]],
        _ => (0..n)
            .map(|i| VIRIDIS[i * (VIRIDIS.len() - 1) / (n - 1)])
            .collect(),
    }
}

fn cycle(palette: &[&'static str], n: usize) -> Vec<&'static str> {
    palette.iter().copied().cycle().take(n).collect()
}

fn bar_layout(title: &str, x_title: &str, y_title: &str) -> Layout {
    Layout::new()
        .title(title)
        .x_axis(Axis::new().title(x_title).tick_angle(-45.0))
        .y_axis(Axis::new().title(y_title))
}

/// Team performance at a single venue.
pub fn plot_venue_performance(teams: Vec<String>, centuries: Vec<u64>, venue: &str) -> Plot {
    let trace = Bar::new(teams, centuries)
        .name("Centuries")
        .marker(Marker::new().color(VENUE_BAR_COLOR));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(bar_layout(
        &format!("Team Performance in {venue}"),
        "Team",
        "Number of Centuries",
    ));
    plot
}

pub fn plot_top_scorers(players: Vec<String>, centuries: Vec<u64>) -> Plot {
    let shown = players.len();
    let colors = cycle(&TOP_SCORER_PALETTE, shown);
    let trace = Bar::new(players, centuries)
        .name("Centuries")
        .marker(Marker::new().color_array(colors));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(bar_layout(
        &format!("Top {shown} Players with the Highest Number of Centuries"),
        "Player",
        "Number of Centuries",
    ));
    plot
}

/// Two bars, Lost then Won.
pub fn plot_win_loss(summary: &WinLoss) -> Plot {
    let trace = Bar::new(vec!["Lost", "Won"], vec![summary.lost, summary.won])
        .name("Centuries")
        .marker(Marker::new().color_array(WIN_LOSS_COLORS.to_vec()));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(
        Layout::new()
            .title("Impact of Centuries on Match Results")
            .x_axis(Axis::new().title("Match Result"))
            .y_axis(Axis::new().title("Number of Centuries")),
    );
    plot
}

/// Mean runs against mean strike rate, one marker per player.
pub fn plot_runs_vs_strike_rate(
    players: Vec<String>,
    mean_runs: Vec<f64>,
    mean_strike_rate: Vec<f64>,
    venue: &str,
) -> Plot {
    let trace = Scatter::new(mean_runs, mean_strike_rate)
        .mode(Mode::LinesMarkers)
        .name("Players")
        .text_array(players)
        .line(Line::new().color("blue"))
        .marker(
            Marker::new()
                .size(10)
                .color("red")
                .line(Line::new().color("blue").width(1.5)),
        );

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(
        Layout::new()
            .title(format!("Relationship between Batting Average and Strike Rate in {venue}").as_str())
            .x_axis(Axis::new().title("Batting Average"))
            .y_axis(Axis::new().title("Strike Rate")),
    );
    plot
}

pub fn plot_centuries_by_team(teams: Vec<String>, centuries: Vec<u64>) -> Plot {
    let colors = viridis(teams.len());
    let trace = Bar::new(teams, centuries)
        .name("Centuries")
        .marker(Marker::new().color_array(colors));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(bar_layout(
        "Centuries Scored by Players from Different Teams",
        "Team",
        "Count of Centuries",
    ));
    plot
}
