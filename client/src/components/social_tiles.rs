//! Row of third-party sign-in tiles.

use leptos::prelude::*;

use crate::state::sign_in::SocialProvider;

/// One button per provider; pressing a tile reports its provider.
#[component]
pub fn SocialTiles(on_select: Callback<SocialProvider>) -> impl IntoView {
    view! {
        <div class="sign-in__social-row" role="group" aria-label="Social sign in options">
            {SocialProvider::ALL
                .into_iter()
                .map(move |provider| {
                    view! {
                        <button
                            type="button"
                            class="sign-in__social-tile"
                            aria-label={provider.tile_label()}
                            on:click=move |_| on_select.run(provider)
                        >
                            <span
                                class={format!("sign-in__social-icon sign-in__social-icon--{}", provider.as_str())}
                                aria-hidden="true"
                            ></span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
