use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, broadcast, storage};

/// The explicit session object for the whole admin: token plus the
/// operator it belongs to. Owned by [`SessionProvider`] at the
/// application root; everything else reads it through context.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Session context provider component.
///
/// Lifecycle: restore-from-storage on mount (validating the stored token,
/// refreshing once if it is stale), clear-on-logout, and teardown when
/// another tab announces a logout.
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(Session::default());

    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            match api::get_current_user(&access_token).await {
                Ok(user) => {
                    set_session.set(Session {
                        access_token: Some(access_token),
                        user: Some(user),
                    });
                }
                Err(_) => {
                    // Stale access token: one refresh attempt, then give up
                    // and require a fresh login.
                    let Some(refresh) = storage::get_refresh_token() else {
                        storage::clear_tokens();
                        return;
                    };
                    match api::refresh_token(refresh).await {
                        Ok(response) => {
                            storage::save_access_token(&response.access_token);
                            if let Ok(user) = api::get_current_user(&response.access_token).await {
                                set_session.set(Session {
                                    access_token: Some(response.access_token),
                                    user: Some(user),
                                });
                            }
                        }
                        Err(_) => {
                            storage::clear_tokens();
                        }
                    }
                }
            }
        });
    });

    broadcast::listen_for_remote_logout(set_session);

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session state.
pub fn use_session() -> (ReadSignal<Session>, WriteSignal<Session>) {
    let session =
        use_context::<ReadSignal<Session>>().expect("SessionProvider not found in component tree");
    let set_session =
        use_context::<WriteSignal<Session>>().expect("SessionProvider not found in component tree");
    (session, set_session)
}

/// Helper: check if the current operator is an admin.
pub fn is_admin() -> bool {
    let (session, _) = use_session();
    session
        .get()
        .user
        .as_ref()
        .map(|u| u.is_admin)
        .unwrap_or(false)
}

/// Helper: perform login and install the session.
pub async fn do_login(email: String, password: String) -> Result<(), String> {
    let response = api::login(email, password).await?;

    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);

    let (_, set_session) = use_session();
    set_session.set(Session {
        access_token: Some(response.access_token),
        user: Some(response.user),
    });

    Ok(())
}

/// Helper: perform logout, clearing this tab and announcing to the rest.
pub async fn do_logout() -> Result<(), String> {
    if let Some(refresh) = storage::get_refresh_token() {
        let _ = api::logout(refresh).await;
    }

    storage::clear_tokens();
    broadcast::announce_logout();

    let (_, set_session) = use_session();
    set_session.set(Session::default());

    Ok(())
}
