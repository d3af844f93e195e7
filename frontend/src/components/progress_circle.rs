use yew::prelude::*;

const RADIUS: f64 = 35.0;

/// Circular progress indicator drawn over the preview while a transfer is
/// in flight. The percent label sits in the middle of the ring.
pub fn render_progress_circle(percent: u8) -> Html {
    let circumference = 2.0 * std::f64::consts::PI * RADIUS;
    let offset = circumference * (1.0 - f64::from(percent.min(100)) / 100.0);

    html! {
        <div class="progress-circle" role="progressbar" aria-valuenow={percent.to_string()}>
            <svg width="90" height="90" viewBox="0 0 90 90">
                <circle
                    class="progress-circle-track"
                    cx="45" cy="45" r={RADIUS.to_string()}
                    fill="none" stroke-width="6"
                />
                <circle
                    class="progress-circle-fill"
                    cx="45" cy="45" r={RADIUS.to_string()}
                    fill="none" stroke-width="6"
                    stroke-dasharray={format!("{:.2}", circumference)}
                    stroke-dashoffset={format!("{:.2}", offset)}
                    transform="rotate(-90 45 45)"
                />
            </svg>
            <span class="progress-circle-label">{ format!("{}%", percent) }</span>
        </div>
    }
}
