use odonto_core::tasks::TaskStats;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct StatsBarProps {
    pub stats: TaskStats,
}

#[function_component(StatsBar)]
pub fn stats_bar(props: &StatsBarProps) -> Html {
    let stats = props.stats;

    let cell = |label: &str, value: usize, class: &str| {
        html! {
            <div class={format!("stat {class}")}>
                <div class="value">{ value }</div>
                <div class="label">{ label }</div>
            </div>
        }
    };

    html! {
        <div class="stats-bar">
            { cell("Total", stats.total, "total") }
            { cell("Active", stats.active, "active") }
            { cell("Done", stats.completed, "done") }
            { cell("High", stats.high, "high") }
            { cell("Medium", stats.medium, "medium") }
            { cell("Low", stats.low, "low") }
        </div>
    }
}
