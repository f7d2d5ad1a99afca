use yew::prelude::*;
use yew_router::prelude::Link;
use crate::{Route, styles};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class={styles::HUB_CONTAINER}>
            <h1 class={styles::HUB_TITLE}>{"Minigames Hub"}</h1>
            <div class={styles::HUB_GRID}>
                <Link<Route> to={Route::TwisterWheel} classes={classes!(styles::HUB_CARD)}>
                    <h2 class={styles::HUB_CARD_TITLE}>{"Twister Wheel"}</h2>
                    <p class={styles::HUB_CARD_TEXT}>{"A customizable spinner for your Twister games."}</p>
                </Link<Route>>
            </div>
        </div>
    }
}
