pub mod audio;
pub mod config;
pub mod pages;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::config::BASE_PATH;
use crate::pages::{
    games::frontend_twister_game::FrontendTwisterGame,
    home::Home,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/twister-wheel")]
    TwisterWheel,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter basename={BASE_PATH}>
            <div class={styles::APP_SHELL}>
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::TwisterWheel => html! { <FrontendTwisterGame /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}
