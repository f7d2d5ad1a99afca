mod wheel_svg;
mod wheel_utils;

use gloo::events::EventListener;
use gloo_timers::callback::Interval;
use log::{debug, info};
use rand::rngs::ThreadRng;
use shared::audio::MusicDeck;
use shared::constants::{DEFAULT_NEW_COLOR, FADE_INTERVAL_MS};
use shared::random::RngSource;
use shared::settings::GameSettings;
use shared::shared_twister_game::TwisterGame;
use yew::prelude::*;

use crate::audio::{track_urls, HtmlAudioChannel};
use crate::storage::LocalStorage;
use crate::styles;

use wheel_svg::WheelSvg;
use wheel_utils::{ColorForm, ColorList, ResultDisplay, SettingsPanel, SpinButton};

pub enum Msg {
    Spin,
    /// The wheel finished animating to the last target.
    SpinEnded,
    FadeTick,
    TrackEnded,
    ToggleConfig,
    SetDuration(f64),
    ToggleMusic,
    SetNewName(String),
    SetNewColor(String),
    AddColor,
    RemoveColor(String),
}

pub struct FrontendTwisterGame {
    game: TwisterGame<LocalStorage, RngSource<ThreadRng>>,
    deck: MusicDeck<HtmlAudioChannel, Interval>,
    track_rng: RngSource<ThreadRng>,
    settings: GameSettings,
    show_config: bool,
    new_name: String,
    new_color: String,
    _ended_listener: Option<EventListener>,
}

impl Component for FrontendTwisterGame {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let game = TwisterGame::new(LocalStorage::new(), RngSource::thread());
        let mut track_rng = RngSource::thread();
        let deck = MusicDeck::new(HtmlAudioChannel::new(), track_urls(), &mut track_rng);

        let ended_listener = deck.channel().element().map(|element| {
            let link = ctx.link().clone();
            EventListener::new(element, "ended", move |_| link.send_message(Msg::TrackEnded))
        });

        info!("Twister wheel ready with {} colors", game.palette().len());

        Self {
            game,
            deck,
            track_rng,
            settings: GameSettings::default(),
            show_config: false,
            new_name: String::new(),
            new_color: DEFAULT_NEW_COLOR.to_string(),
            _ended_listener: ended_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Spin => {
                if self.game.request_spin().is_none() {
                    return false;
                }
                self.deck.on_spin_start(self.settings.music_enabled);
                true
            }
            Msg::SpinEnded => {
                if !self.game.is_spinning() {
                    return false;
                }
                self.game.complete_spin();

                let link = ctx.link().clone();
                self.deck.begin_fade(Interval::new(FADE_INTERVAL_MS, move || {
                    link.send_message(Msg::FadeTick)
                }));
                true
            }
            Msg::FadeTick => {
                self.deck.fade_tick();
                false
            }
            Msg::TrackEnded => {
                self.deck.on_track_ended(&mut self.track_rng, self.game.is_spinning());
                false
            }
            Msg::ToggleConfig => {
                self.show_config = !self.show_config;
                true
            }
            Msg::SetDuration(secs) => {
                self.settings.set_spin_duration(secs);
                true
            }
            Msg::ToggleMusic => {
                self.settings.toggle_music();
                true
            }
            Msg::SetNewName(name) => {
                self.new_name = name;
                true
            }
            Msg::SetNewColor(color) => {
                self.new_color = color;
                true
            }
            Msg::AddColor => {
                let id = self.game.add_color(&self.new_color, &self.new_name, js_sys::Date::now() as u64);
                debug!("Added color {}", id);
                self.new_name.clear();
                true
            }
            Msg::RemoveColor(id) => self.game.remove_color(&id),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let is_spinning = self.game.is_spinning();

        html! {
            <div class={styles::GAME_PAGE}>
                <div class={styles::GAME_CARD}>
                    <div class={styles::GAME_HEADER}>
                        <h1 class={styles::GAME_TITLE}>{"Twister Spinner"}</h1>
                        <button
                            onclick={link.callback(|_| Msg::ToggleConfig)}
                            class={styles::BUTTON_ICON}
                            title="Settings"
                        >
                            <svg class="w-6 h-6" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                <circle cx="12" cy="12" r="3" />
                                <path d="M19.4 15a1.7 1.7 0 0 0 .3 1.8l.1.1a2 2 0 1 1-2.8 2.8l-.1-.1a1.7 1.7 0 0 0-1.8-.3 1.7 1.7 0 0 0-1 1.5V21a2 2 0 1 1-4 0v-.1a1.7 1.7 0 0 0-1.1-1.5 1.7 1.7 0 0 0-1.8.3l-.1.1a2 2 0 1 1-2.8-2.8l.1-.1a1.7 1.7 0 0 0 .3-1.8 1.7 1.7 0 0 0-1.5-1H3a2 2 0 1 1 0-4h.1a1.7 1.7 0 0 0 1.5-1.1 1.7 1.7 0 0 0-.3-1.8l-.1-.1a2 2 0 1 1 2.8-2.8l.1.1a1.7 1.7 0 0 0 1.8.3H9a1.7 1.7 0 0 0 1-1.5V3a2 2 0 1 1 4 0v.1a1.7 1.7 0 0 0 1 1.5 1.7 1.7 0 0 0 1.8-.3l.1-.1a2 2 0 1 1 2.8 2.8l-.1.1a1.7 1.7 0 0 0-.3 1.8V9a1.7 1.7 0 0 0 1.5 1H21a2 2 0 1 1 0 4h-.1a1.7 1.7 0 0 0-1.5 1z" />
                            </svg>
                        </button>
                    </div>

                    <div class={styles::GAME_AREA}>
                        <WheelSvg
                            wedges={self.game.wedges().to_vec()}
                            rotation={self.game.rotation()}
                            duration_secs={self.settings.spin_duration_secs}
                            on_spin_end={link.callback(|_| Msg::SpinEnded)}
                        />

                        <ResultDisplay
                            last_result={self.game.last_result().map(str::to_string)}
                            is_spinning={is_spinning}
                        />

                        <SpinButton
                            is_spinning={is_spinning}
                            disabled={!self.game.can_spin()}
                            onclick={link.callback(|_| Msg::Spin)}
                        />
                    </div>

                    if self.show_config {
                        <div class={styles::SETTINGS_PANEL}>
                            <h3 class={styles::SETTINGS_TITLE}>{"Settings"}</h3>

                            <SettingsPanel
                                settings={self.settings}
                                on_duration={link.callback(Msg::SetDuration)}
                                on_toggle_music={link.callback(|_| Msg::ToggleMusic)}
                            />

                            <h4 class="text-lg font-bold mb-2">{"Colors"}</h4>

                            <ColorForm
                                name={self.new_name.clone()}
                                color={self.new_color.clone()}
                                on_name={link.callback(Msg::SetNewName)}
                                on_color={link.callback(Msg::SetNewColor)}
                                on_add={link.callback(|_| Msg::AddColor)}
                            />

                            <ColorList
                                colors={self.game.palette().colors().to_vec()}
                                on_remove={link.callback(Msg::RemoveColor)}
                            />
                        </div>
                    }
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.deck.release();
    }
}
