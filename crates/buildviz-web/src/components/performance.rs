use buildviz_core::dataset::{PERFORMANCE_HEADING, PERFORMANCE_NOTE};
use buildviz_core::{bar_scene, BarRect, BarStyle, PERFORMANCE_DATA};
use leptos::prelude::*;

use super::px;

/// Horizontal bar chart of the real/user/sys time breakdown.
#[component]
pub fn PerformanceChart() -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<BarRect>);

    let scene = match bar_scene(&PERFORMANCE_DATA, BarStyle::default()) {
        Ok(scene) => scene,
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            return view! { <div class="chart-error">{e.to_string()}</div> }.into_any();
        }
    };
    let style = scene.style;

    view! {
        <div class="performance glass-panel">
            <div class="panel-heading">
                <h3>{PERFORMANCE_HEADING}</h3>
                <span class="mono">{PERFORMANCE_NOTE}</span>
            </div>
            <svg class="bars" viewBox=style.viewport.view_box() preserveAspectRatio="none">
                <g class="bar-grid" stroke=style.grid_stroke stroke-dasharray=style.grid_dash>
                    {scene.grid.iter().map(|(top, bottom)| view! {
                        <line x1=px(top.x) y1=px(top.y) x2=px(bottom.x) y2=px(bottom.y) />
                    }).collect::<Vec<_>>()}
                </g>
                {scene.labels.iter().map(|label| view! {
                    <text
                        class="bar-label"
                        x=px(label.position.x)
                        y=px(label.position.y)
                        text-anchor=label.anchor.as_svg()
                        dominant-baseline="middle"
                        fill=style.label_color
                        font-size=style.label_font_size.to_string()
                    >
                        {label.text.clone()}
                    </text>
                }).collect::<Vec<_>>()}
                {scene.bars.iter().cloned().map(|bar| {
                    let path = bar.path_data();
                    let color = bar.color;
                    let value = bar.value.to_string();
                    view! {
                        <path
                            class="bar"
                            d=path
                            fill=color
                            data-value=value
                            on:mouseenter=move |_| set_hovered.set(Some(bar.clone()))
                            on:mouseleave=move |_| set_hovered.set(None)
                        />
                    }
                }).collect::<Vec<_>>()}
            </svg>
            <Show when=move || hovered.with(Option::is_some)>
                <div class="chart-tooltip">
                    {move || hovered.get().map(|b| format!("{}: {}", b.name, b.value))}
                </div>
            </Show>
        </div>
    }
    .into_any()
}
