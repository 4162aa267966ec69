use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::routes::login::Login;
use crate::routes::sensor::DayCount;
use crate::routes::user::ChangePassword;
use crate::vars::{CHANGE_PASSWORD_PATH, DAY_COUNT_PATH, LOGIN_PATH};
use crate::GlobalState;

#[component]
pub fn RedirectTo(path: &'static str) -> impl IntoView {
    let navigate = use_navigate();
    navigate(path, Default::default());
}

#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(GlobalState::default());
    provide_meta_context();
    provide_context(state);

    view! {
        <Title text="Spectrum Browser"/>
        <div class="my-0 mx-auto px-8 max-w-7xl text-left">
            <Router fallback=|| view! { <RedirectTo path=LOGIN_PATH/> }.into_view()>
                <nav class="py-2 px-4 text-lg font-medium h-12 bg-slate-700 flex items-center">
                    <a href=LOGIN_PATH class="text-2xl font-mono font-light text-white tracking-widest">
                        "spectrum browser"
                    </a>
                </nav>
                <main>
                    <Routes>
                        <Route path=LOGIN_PATH view=|| view! { <Login/> }/>
                        <Route
                            path=CHANGE_PASSWORD_PATH
                            view=|| view! { <ChangePassword/> }
                        />
                        <Route path=DAY_COUNT_PATH view=|| view! { <DayCount/> }/>
                    </Routes>
                </main>
            </Router>
        </div>
    }
}
