use buildviz_core::dataset::INDUSTRY_HEADING;
use buildviz_core::Language;
use leptos::prelude::*;

use super::radar::RadarChart;

/// Economic and industrial impact: localized text cards beside the radar.
#[component]
pub fn ImpactSection(language: Memo<Language>) -> impl IntoView {
    let bundle = move || language.get().bundle();

    view! {
        <section class="impact glass-panel">
            <h2 class="impact-title">{move || bundle().title}</h2>

            <div class="impact-grid">
                <div class="impact-text">
                    <div class="factor-cards">
                        <div class="card macro">
                            <h4>{move || bundle().macro_title}</h4>
                            <p>{move || bundle().macro_desc}</p>
                        </div>
                        <div class="card micro">
                            <h4>{move || bundle().micro_title}</h4>
                            <p>{move || bundle().micro_desc}</p>
                        </div>
                    </div>

                    <div class="industry">
                        <h4>{INDUSTRY_HEADING}</h4>
                        <ul>
                            <li class="it-impact">{move || bundle().it_impact}</li>
                            <li class="non-it-impact">{move || bundle().non_it_impact}</li>
                        </ul>
                    </div>

                    <div class="value-prop">
                        <span>{move || bundle().value_prop}</span>
                    </div>
                </div>

                <RadarChart />
            </div>
        </section>
    }
}
