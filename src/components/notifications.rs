use crate::models::notification::Notification;
use crate::state::use_app_state;
use crate::utils::click_outside::close_on_click_outside;
use leptos::html::Div;
use leptos::*;
use leptos_router::use_navigate;

/// Bell button with unread badge and the viewer's notification dropdown.
#[component]
pub fn NotificationBell() -> impl IntoView {
    let state = use_app_state();
    let open = create_rw_signal(false);
    let container = create_node_ref::<Div>();
    close_on_click_outside(container, move || open.set(false));
    let unread = move || state.unread_notifications();
    let notifications = move || {
        let viewer = state.viewer_id();
        state.inbox.with(|inbox| inbox.for_recipient(&viewer).to_vec())
    };

    view! {
        <div class="notifications" node_ref=container>
            <button
                class="icon-button"
                title="Notificações"
                aria-label=move || format!("Notificações ({} não lidas)", unread())
                on:click=move |_| open.update(|o| *o = !*o)
            >
                { "🔔" }
                <Show when=move || { unread() > 0 }>
                    <span class="badge">{ unread }</span>
                </Show>
            </button>
            <Show when=move || open.get()>
                <div class="notifications-dropdown">
                    <div class="dropdown-title">{ "Notificações" }</div>
                    {move || {
                        let list = notifications();
                        if list.is_empty() {
                            view! { <p class="empty-message">{ "Nenhuma notificação nova." }</p> }.into_view()
                        } else {
                            list.into_iter()
                                .map(|notification| view! {
                                    <NotificationItem notification=notification on_open=move |_: ()| open.set(false)/>
                                })
                                .collect::<Vec<_>>()
                                .into_view()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}

#[component]
fn NotificationItem(notification: Notification, #[prop(into)] on_open: Callback<()>) -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let names = state.catalog.with_untracked(|c| {
        let actor = c.user(&notification.actor_id)?.username.clone();
        let item = c.item(&notification.item_id)?.title.clone();
        Some((actor, item))
    });
    // Notifications about removed users or items are not shown.
    let Some((actor_name, item_title)) = names else {
        return ().into_view();
    };

    let id = store_value(notification.id.clone());
    let item_href = format!("/item/{}", notification.item_id);
    let profile_href = format!("/profile/{}", notification.actor_id);
    let read = notification.read;

    let open_item = {
        let navigate = navigate.clone();
        move |_| {
            state.mark_notification_read(&id.get_value());
            on_open.call(());
            navigate(&item_href, Default::default());
        }
    };
    let open_profile = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        state.mark_notification_read(&id.get_value());
        on_open.call(());
        navigate(&profile_href, Default::default());
    };
    let mark_read = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        state.mark_notification_read(&id.get_value());
    };

    view! {
        <div class="notification-item" class:read=read on:click=open_item>
            <p>
                <strong class="link" on:click=open_profile>{ actor_name }</strong>
                { " fez uma review de " }
                <strong>{ item_title }</strong>
            </p>
            {(!read).then(|| view! {
                <button class="mark-read" on:click=mark_read>{ "Marcar como lida" }</button>
            })}
        </div>
    }
    .into_view()
}
