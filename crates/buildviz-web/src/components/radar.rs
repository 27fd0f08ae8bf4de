use buildviz_core::dataset::{RADAR_CAPTION, RADAR_SERIES_NAME};
use buildviz_core::{points_attr, radar_scene, RadarStyle, RadarVertex, RADAR_DATA};
use leptos::prelude::*;

use super::px;

#[component]
pub fn RadarChart() -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<RadarVertex>);

    let scene = match radar_scene(&RADAR_DATA, RadarStyle::default()) {
        Ok(scene) => scene,
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            return view! { <div class="chart-error">{e.to_string()}</div> }.into_any();
        }
    };
    let style = scene.style;
    let polygon = points_attr(&scene.polygon());

    view! {
        <div class="radar-chart">
            <svg
                class="radar"
                viewBox=style.viewport.view_box()
                preserveAspectRatio="xMidYMid meet"
            >
                <g class="radar-grid" stroke=style.grid_stroke fill="none">
                    {scene.rings.iter().map(|ring| view! {
                        <polygon points=points_attr(ring) />
                    }).collect::<Vec<_>>()}
                    {scene.spokes.iter().map(|(from, to)| view! {
                        <line x1=px(from.x) y1=px(from.y) x2=px(to.x) y2=px(to.y) />
                    }).collect::<Vec<_>>()}
                </g>
                <polygon
                    class="radar-area"
                    points=polygon
                    stroke=style.stroke
                    fill=style.fill
                    fill-opacity=style.fill_opacity.to_string()
                />
                {scene.labels.iter().map(|label| view! {
                    <text
                        class="radar-label"
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
                {scene.vertices.iter().cloned().map(|vertex| {
                    let point = vertex.point;
                    view! {
                        <circle
                            class="radar-dot"
                            cx=px(point.x)
                            cy=px(point.y)
                            r="4"
                            fill=style.stroke
                            on:mouseenter=move |_| set_hovered.set(Some(vertex.clone()))
                            on:mouseleave=move |_| set_hovered.set(None)
                        />
                    }
                }).collect::<Vec<_>>()}
            </svg>
            <Show when=move || hovered.with(Option::is_some)>
                <div class="chart-tooltip">
                    {move || hovered.get().map(|v| format!("{}: {} {}", v.subject, RADAR_SERIES_NAME, v.value))}
                </div>
            </Show>
            <p class="chart-caption">{RADAR_CAPTION}</p>
        </div>
    }
    .into_any()
}
