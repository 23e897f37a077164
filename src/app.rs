use leptos::prelude::*;
use crate::core::BoardConfig;
use crate::features::kanban::use_board;
use crate::pages::Kanban;

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::load();
    let title = config.title.clone();

    // The page's only board; components reach it through context.
    let board = use_board(config);
    provide_context(board);

    view! {
        <main class="app">
            <Kanban title=title />
        </main>
    }
}
