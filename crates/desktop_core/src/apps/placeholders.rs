//! Built-in placeholder app implementations used while fuller apps are still in development.

use app_contract::{AppLifecycleEvent, AppMountContext};
use leptos::*;
use serde_json::Value;

/// Mounts the Calculator placeholder app.
pub(super) fn mount_calculator(_: AppMountContext) -> View {
    view! { <CalculatorPlaceholderApp /> }.into_view()
}

/// Mounts the Mail placeholder app.
pub(super) fn mount_mail(context: AppMountContext) -> View {
    view! { <MailPlaceholderApp context=context /> }.into_view()
}

/// Mounts the Notes placeholder app.
pub(super) fn mount_notes(context: AppMountContext) -> View {
    view! { <NotesPlaceholderApp context=context /> }.into_view()
}

/// Mounts the Music placeholder app.
pub(super) fn mount_music(context: AppMountContext) -> View {
    view! { <MusicPlaceholderApp context=context /> }.into_view()
}

/// Mounts the Resume placeholder app.
pub(super) fn mount_resume(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-resume-shell">
            <article class="app-resume-document">
                <header>
                    <h1>"Jordan Reyes"</h1>
                    <p>"Frontend systems engineer"</p>
                </header>
                <section>
                    <h2>"Experience"</h2>
                    <p><strong>"Shell platform team"</strong>" - window runtime, input routing, and launcher surfaces for a browser desktop."</p>
                    <p><strong>"Design systems"</strong>" - shared component library with a stable DOM token contract."</p>
                </section>
                <section>
                    <h2>"Selected work"</h2>
                    <p>"Pure-reducer window registry with replayable interaction sessions."</p>
                    <p>"Dock magnification tuned for pointer-distance falloff."</p>
                </section>
            </article>
            <div class="app-statusbar">
                <span>"Read-only document"</span>
                <span>"1 page"</span>
            </div>
        </div>
    }
    .into_view()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CalcOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl CalcOp {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

fn format_calc_value(value: f64) -> String {
    if !value.is_finite() {
        return "Error".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[component]
fn CalculatorPlaceholderApp() -> impl IntoView {
    let entry = create_rw_signal("0".to_string());
    let stored = create_rw_signal::<Option<(f64, CalcOp)>>(None);
    let replace_entry = create_rw_signal(true);

    let press_digit = move |digit: &'static str| {
        if replace_entry.get_untracked() || entry.get_untracked() == "0" {
            entry.set(digit.to_string());
            replace_entry.set(false);
        } else {
            entry.update(|current| current.push_str(digit));
        }
    };

    let press_dot = move |_| {
        if replace_entry.get_untracked() {
            entry.set("0.".to_string());
            replace_entry.set(false);
        } else if !entry.get_untracked().contains('.') {
            entry.update(|current| current.push('.'));
        }
    };

    let press_op = move |op: CalcOp| {
        let mut value = entry.get_untracked().parse::<f64>().unwrap_or(0.0);
        if let Some((lhs, pending)) = stored.get_untracked() {
            if !replace_entry.get_untracked() {
                value = pending.apply(lhs, value);
                entry.set(format_calc_value(value));
            } else {
                value = lhs;
            }
        }
        stored.set(Some((value, op)));
        replace_entry.set(true);
    };

    let press_equals = move |_| {
        if let Some((lhs, pending)) = stored.get_untracked() {
            let rhs = entry.get_untracked().parse::<f64>().unwrap_or(0.0);
            entry.set(format_calc_value(pending.apply(lhs, rhs)));
            stored.set(None);
            replace_entry.set(true);
        }
    };

    let press_clear = move |_| {
        entry.set("0".to_string());
        stored.set(None);
        replace_entry.set(true);
    };

    let digit = move |label: &'static str| {
        view! {
            <button type="button" class="app-action" on:click=move |_| press_digit(label)>
                {label}
            </button>
        }
    };
    let op = move |value: CalcOp| {
        view! {
            <button type="button" class="app-action" on:click=move |_| press_op(value)>
                {value.glyph()}
            </button>
        }
    };

    view! {
        <div class="app-shell app-calculator-shell">
            <output class="app-calculator-display" aria-live="polite">
                {move || {
                    let pending = stored
                        .get()
                        .map(|(lhs, op)| format!("{} {} ", format_calc_value(lhs), op.glyph()))
                        .unwrap_or_default();
                    format!("{pending}{}", entry.get())
                }}
            </output>
            <div class="app-calculator-keys" role="group" aria-label="Calculator keys">
                {digit("7")} {digit("8")} {digit("9")} {op(CalcOp::Divide)}
                {digit("4")} {digit("5")} {digit("6")} {op(CalcOp::Multiply)}
                {digit("1")} {digit("2")} {digit("3")} {op(CalcOp::Subtract)}
                {digit("0")}
                <button type="button" class="app-action" on:click=press_dot>"."</button>
                <button type="button" class="app-action" on:click=press_equals>"="</button>
                {op(CalcOp::Add)}
                <button type="button" class="app-action app-calculator-clear" on:click=press_clear>
                    "C"
                </button>
            </div>
        </div>
    }
}

struct MailMessage {
    folder: &'static str,
    sender: &'static str,
    subject: &'static str,
    body: &'static str,
}

const MAIL_MESSAGES: [MailMessage; 5] = [
    MailMessage {
        folder: "inbox",
        sender: "Build bot",
        subject: "Nightly pipeline green",
        body: "All suites passed on the nightly run. Artifacts are published.",
    },
    MailMessage {
        folder: "inbox",
        sender: "Priya",
        subject: "Dock magnification review",
        body: "The falloff curve feels right now. One nit on the lift easing inline.",
    },
    MailMessage {
        folder: "inbox",
        sender: "Facilities",
        subject: "Office move reminder",
        body: "Desks on the fourth floor move Friday. Pack monitors by Thursday evening.",
    },
    MailMessage {
        folder: "sent",
        sender: "Me",
        subject: "Re: Dock magnification review",
        body: "Fixed the easing nit, thanks for the close read.",
    },
    MailMessage {
        folder: "archive",
        sender: "Recruiting",
        subject: "Welcome aboard",
        body: "Your accounts are provisioned. See the onboarding doc for first steps.",
    },
];

const MAIL_FOLDERS: [&str; 3] = ["inbox", "sent", "archive"];

#[component]
fn MailPlaceholderApp(context: AppMountContext) -> impl IntoView {
    let initial_folder = context
        .launch_params
        .get("folder")
        .and_then(Value::as_str)
        .filter(|folder| MAIL_FOLDERS.contains(folder))
        .unwrap_or("inbox")
        .to_string();
    let folder = create_rw_signal(initial_folder);
    let selected = create_rw_signal::<Option<usize>>(None);

    let visible = move || {
        let folder = folder.get();
        MAIL_MESSAGES
            .iter()
            .enumerate()
            .filter(|(_, message)| message.folder == folder)
            .map(|(index, _)| index)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="app-shell app-mail-shell">
            <nav class="app-mail-folders" aria-label="Mail folders">
                {MAIL_FOLDERS
                    .into_iter()
                    .map(|name| {
                        view! {
                            <button
                                type="button"
                                class="app-action"
                                class:selected=move || folder.get() == name
                                on:click=move |_| {
                                    folder.set(name.to_string());
                                    selected.set(None);
                                }
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <ul class="app-mail-list">
                {move || {
                    visible()
                        .into_iter()
                        .map(|index| {
                            let message = &MAIL_MESSAGES[index];
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class:selected=move || selected.get() == Some(index)
                                        on:click=move |_| selected.set(Some(index))
                                    >
                                        <strong>{message.sender}</strong>
                                        <span>{message.subject}</span>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
            <section class="app-mail-reading-pane">
                {move || match selected.get() {
                    Some(index) => {
                        let message = &MAIL_MESSAGES[index];
                        view! {
                            <div>
                                <h2>{message.subject}</h2>
                                <p class="app-mail-sender">{message.sender}</p>
                                <p>{message.body}</p>
                            </div>
                        }
                            .into_view()
                    }
                    None => view! { <p class="app-mail-empty">"No message selected"</p> }.into_view(),
                }}
            </section>
        </div>
    }
}

#[component]
fn NotesPlaceholderApp(context: AppMountContext) -> impl IntoView {
    let initial_draft = context
        .launch_params
        .get("draft")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let draft = create_rw_signal(initial_draft);
    let lifecycle = context.lifecycle;

    view! {
        <div class="app-shell app-notes-shell">
            <textarea
                class="app-notes-editor"
                placeholder="Jot something down..."
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            ></textarea>
            <div class="app-statusbar">
                <span>{move || format!("{} characters", draft.get().chars().count())}</span>
                <span>{move || format!("window: {}", lifecycle.get().token())}</span>
            </div>
        </div>
    }
}

const MUSIC_TRACKS: [(&str, &str, &str); 4] = [
    ("Window Seat", "The Reducers", "3:41"),
    ("Cascade", "Offset Origin", "4:05"),
    ("Magnify", "Dock Theory", "2:58"),
    ("Monotonic", "Counter Culture", "5:12"),
];

#[component]
fn MusicPlaceholderApp(context: AppMountContext) -> impl IntoView {
    let selected = create_rw_signal(0usize);
    let playing = create_rw_signal(false);
    let lifecycle = context.lifecycle;

    // Playback is a UI simulation; minimizing still pauses it so the
    // lifecycle feed is observable end to end.
    create_effect(move |_| {
        if lifecycle.get() == AppLifecycleEvent::Minimized {
            playing.set(false);
        }
    });

    view! {
        <div class="app-shell app-music-shell">
            <ul class="app-music-tracks">
                {MUSIC_TRACKS
                    .into_iter()
                    .enumerate()
                    .map(|(index, (title, artist, length))| {
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class:selected=move || selected.get() == index
                                    on:click=move |_| {
                                        selected.set(index);
                                        playing.set(true);
                                    }
                                >
                                    <strong>{title}</strong>
                                    <span>{artist}</span>
                                    <span class="app-music-length">{length}</span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <div class="app-toolbar" role="group" aria-label="Playback controls">
                <button type="button" class="app-action" on:click=move |_| playing.update(|p| *p = !*p)>
                    {move || if playing.get() { "Pause" } else { "Play" }}
                </button>
                <span class="app-music-now-playing">
                    {move || {
                        let (title, artist, _) = MUSIC_TRACKS[selected.get()];
                        if playing.get() {
                            format!("Now playing: {title} - {artist}")
                        } else {
                            format!("Paused: {title} - {artist}")
                        }
                    }}
                </span>
            </div>
        </div>
    }
}
