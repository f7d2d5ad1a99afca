use shared::constants::{MAX_SPIN_DURATION_SECS, SPIN_DURATION_STEP_SECS};
use shared::palette::Color;
use shared::settings::GameSettings;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub last_result: Option<String>,
    pub is_spinning: bool,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let content = match (&props.last_result, props.is_spinning) {
        (Some(result), _) => html! {
            <div class={styles::RESULT_TEXT}>{format!("{}!", result)}</div>
        },
        (None, true) => html! { <div class={styles::RESULT_SPINNING}>{"Spinning..."}</div> },
        (None, false) => html! { <div class={styles::RESULT_IDLE}>{"Press Spin!"}</div> },
    };

    html! {
        <div class={styles::RESULT_AREA}>{content}</div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let state_class = if props.disabled {
        styles::SPIN_BUTTON_DISABLED
    } else {
        styles::SPIN_BUTTON_ACTIVE
    };

    let icon_class = if props.is_spinning { "w-6 h-6 animate-spin" } else { "w-6 h-6" };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            class={classes!(styles::SPIN_BUTTON, state_class)}
        >
            <div class="flex items-center justify-center gap-2">
                <svg class={icon_class} xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="M21 12a9 9 0 1 1-3-6.7L21 8" />
                    <path d="M21 3v5h-5" />
                </svg>
                {"SPIN"}
            </div>
        </button>
    }
}

// Duration slider and music toggle
#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub settings: GameSettings,
    pub on_duration: Callback<f64>,
    pub on_toggle_music: Callback<()>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let on_input = {
        let on_duration = props.on_duration.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(secs) = input.value().parse::<f64>() {
                on_duration.emit(secs);
            }
        })
    };

    let on_toggle = {
        let on_toggle_music = props.on_toggle_music.clone();
        Callback::from(move |_: MouseEvent| on_toggle_music.emit(()))
    };

    let music_on = props.settings.music_enabled;

    html! {
        <>
            <div class="mb-4">
                <label class={styles::SETTINGS_LABEL}>
                    {format!("Spin Duration: {}", props.settings.duration_label())}
                </label>
                <input
                    type="range"
                    min="0"
                    max={MAX_SPIN_DURATION_SECS.to_string()}
                    step={SPIN_DURATION_STEP_SECS.to_string()}
                    value={props.settings.spin_duration_secs.to_string()}
                    oninput={on_input}
                    class={styles::SLIDER}
                />
            </div>

            <div class="mb-4 flex items-center justify-between">
                <label class="text-lg">{"Music"}</label>
                <button
                    onclick={on_toggle}
                    class={if music_on { styles::TOGGLE_ON } else { styles::TOGGLE_OFF }}
                >
                    {if music_on { "On" } else { "Off" }}
                </button>
            </div>
        </>
    }
}

// Add-color form
#[derive(Properties, PartialEq)]
pub struct ColorFormProps {
    pub name: String,
    pub color: String,
    pub on_name: Callback<String>,
    pub on_color: Callback<String>,
    pub on_add: Callback<()>,
}

#[function_component(ColorForm)]
pub fn color_form(props: &ColorFormProps) -> Html {
    let on_name = {
        let on_name = props.on_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_name.emit(input.value());
        })
    };

    let on_color = {
        let on_color = props.on_color.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_color.emit(input.value());
        })
    };

    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <div class="flex gap-2 mb-4">
            <input
                type="text"
                value={props.name.clone()}
                oninput={on_name}
                placeholder="Color Name (e.g. Purple)"
                class={styles::COLOR_NAME_INPUT}
            />
            <input
                type="color"
                value={props.color.clone()}
                oninput={on_color}
                class={styles::COLOR_PICKER}
            />
            <button onclick={on_add} class={styles::ADD_BUTTON}>{"+"}</button>
        </div>
    }
}

// Configured colors, each with a remove control
#[derive(Properties, PartialEq)]
pub struct ColorListProps {
    pub colors: Vec<Color>,
    pub on_remove: Callback<String>,
}

#[function_component(ColorList)]
pub fn color_list(props: &ColorListProps) -> Html {
    html! {
        <div class={styles::COLOR_LIST}>
            { for props.colors.iter().map(|color| {
                let on_remove = {
                    let on_remove = props.on_remove.clone();
                    let id = color.id.clone();
                    Callback::from(move |_: MouseEvent| on_remove.emit(id.clone()))
                };
                html! {
                    <div key={color.id.clone()} class={styles::COLOR_ROW}>
                        <div class="flex items-center gap-2">
                            <div
                                class={styles::COLOR_SWATCH}
                                style={format!("background-color: {}", color.color_value)}
                            />
                            <span class="font-sans">{color.display_name.clone()}</span>
                        </div>
                        <button onclick={on_remove} class={styles::REMOVE_BUTTON} title="Remove color">
                            <svg class="w-4 h-4" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <path d="M3 6h18M8 6V4h8v2M19 6l-1 14H6L5 6" />
                            </svg>
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
