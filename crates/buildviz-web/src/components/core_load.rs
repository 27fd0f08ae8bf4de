use buildviz_core::dataset::CPU_HEADING;
use buildviz_core::{core_meters, CORE_USAGE};
use leptos::prelude::*;

#[component]
pub fn CoreLoad() -> impl IntoView {
    view! {
        <div class="core-load glass-panel">
            <h3>{CPU_HEADING}</h3>
            <div class="meters">
                {core_meters(&CORE_USAGE).into_iter().map(|meter| view! {
                    <div class="core-meter">
                        <div class="meter-label mono">
                            <span>{meter.label}</span>
                            <span>{meter.percent_text.clone()}</span>
                        </div>
                        <div class="meter-track">
                            <div class="meter-fill rust-gradient" style=meter.fill_style()></div>
                        </div>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
