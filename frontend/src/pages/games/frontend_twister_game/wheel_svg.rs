use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use shared::constants::{
    ICON_SIZE, POINTER_COLOR, SIDE_LABEL_OFFSET, WHEEL_CENTER, WHEEL_RADIUS, WHEEL_VIEWBOX,
};
use shared::shared_twister_game::{Limb, Wedge};
use shared::wheel_geometry::{layout, rotation_transform, SpinAnimation, POINTER_PATH};
use yew::prelude::*;

use crate::styles;

type FrameSlot = Rc<RefCell<Option<AnimationFrame>>>;

#[derive(Properties, PartialEq)]
pub struct WheelSvgProps {
    pub wedges: Vec<Wedge>,
    /// Cumulative rotation to animate to.
    pub rotation: f64,
    pub duration_secs: f64,
    /// Fired once when the rotating layer reaches `rotation`.
    pub on_spin_end: Callback<()>,
}

fn limb_glyph(limb: Limb) -> &'static str {
    match limb {
        Limb::Hand => "✋",
        Limb::Foot => "🦶",
    }
}

// Drives one frame and re-arms itself until the animation lands.
fn schedule_frame(
    animation: SpinAnimation,
    started_at: f64,
    displayed: UseStateHandle<f64>,
    shown: Rc<RefCell<f64>>,
    frame: FrameSlot,
    on_spin_end: Callback<()>,
) {
    let slot = frame.clone();
    let handle = request_animation_frame(move |_| {
        let elapsed = js_sys::Date::now() - started_at;
        let rotation = animation.rotation_at(elapsed);
        *shown.borrow_mut() = rotation;
        displayed.set(rotation);

        if animation.is_finished(elapsed) {
            on_spin_end.emit(());
        } else {
            schedule_frame(animation, started_at, displayed, shown, slot, on_spin_end);
        }
    });
    *frame.borrow_mut() = Some(handle);
}

#[function_component(WheelSvg)]
pub fn wheel_svg(props: &WheelSvgProps) -> Html {
    let displayed = use_state(|| props.rotation);
    let shown = use_mut_ref(|| props.rotation);
    let frame: FrameSlot = use_mut_ref(|| None);

    {
        let displayed = displayed.clone();
        let shown = shown.clone();
        let frame = frame.clone();
        let on_spin_end = props.on_spin_end.clone();
        let duration_ms = props.duration_secs * 1000.0;

        use_effect_with(props.rotation, move |target| {
            let start = *shown.borrow();
            if start != *target {
                // Duration is fixed for the whole tween once it starts
                let animation = SpinAnimation::new(start, *target, duration_ms);
                schedule_frame(
                    animation,
                    js_sys::Date::now(),
                    displayed,
                    shown,
                    frame.clone(),
                    on_spin_end,
                );
            }
            move || {
                frame.borrow_mut().take();
            }
        });
    }

    let wheel = layout(&props.wedges, *displayed);

    html! {
        <div class={styles::WHEEL_FRAME}>
            <svg
                width={WHEEL_VIEWBOX.to_string()}
                height={WHEEL_VIEWBOX.to_string()}
                viewBox={format!("0 0 {v} {v}", v = WHEEL_VIEWBOX)}
                class="w-full h-full drop-shadow-xl"
            >
                <g transform={rotation_transform(wheel.rotation_degrees)}>
                    if wheel.is_empty() {
                        <circle
                            cx={WHEEL_CENTER.to_string()}
                            cy={WHEEL_CENTER.to_string()}
                            r={WHEEL_RADIUS.to_string()}
                            fill="#f3f4f6"
                            stroke="black"
                            stroke-width="2"
                        />
                    }
                    { for wheel.wedges.iter().map(|shape| html! {
                        <g key={shape.id.clone()}>
                            <path
                                d={shape.path.clone()}
                                fill={shape.fill.clone()}
                                stroke="black"
                                stroke-width="2"
                                class="transition-colors duration-300"
                            />
                            <g transform={shape.icon.transform.clone()}>
                                <text
                                    y="0"
                                    text-anchor="middle"
                                    dominant-baseline="central"
                                    font-size={ICON_SIZE.to_string()}
                                    class="select-none"
                                >
                                    { limb_glyph(shape.icon.limb) }
                                </text>
                                <text
                                    y={SIDE_LABEL_OFFSET.to_string()}
                                    text-anchor="middle"
                                    fill={shape.icon.text_color.clone()}
                                    class="font-['Patrick_Hand'] text-xl font-bold select-none"
                                    style="text-shadow: 1px 1px 0 #000"
                                >
                                    { shape.icon.side_label }
                                </text>
                            </g>
                        </g>
                    }) }
                    <circle
                        cx={WHEEL_CENTER.to_string()}
                        cy={WHEEL_CENTER.to_string()}
                        r={wheel.hub_radius.to_string()}
                        fill="white"
                        stroke="black"
                        stroke-width="2"
                    />
                </g>
            </svg>

            <div class={styles::WHEEL_POINTER}>
                <svg width="40" height="40" viewBox="0 0 40 40">
                    <path d={POINTER_PATH} fill={POINTER_COLOR} stroke="black" stroke-width="2" />
                </svg>
            </div>
        </div>
    }
}
