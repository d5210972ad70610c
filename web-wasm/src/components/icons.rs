//! Inline SVG icons
//!
//! Feather-style stroke icons plus the social brand glyphs. `SocialIcon`
//! resolves an icon key from the content data; an unknown key falls back to
//! the plain text label instead of rendering nothing.

use leptos::prelude::*;

/// Stroke icon shell; `path_data` is one or more `<path>` d-strings joined
/// by `|`
#[component]
fn StrokeIcon(path_data: &'static str, #[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {path_data
                .split('|')
                .map(|d| view! { <path d=d></path> })
                .collect_view()}
        </svg>
    }
}

#[component]
pub fn SunIcon() -> impl IntoView {
    view! {
        <StrokeIcon path_data="M12 7a5 5 0 1 0 0 10 5 5 0 0 0 0-10z|M12 1v2|M12 21v2|M4.22 4.22l1.42 1.42|M18.36 18.36l1.42 1.42|M1 12h2|M21 12h2|M4.22 19.78l1.42-1.42|M18.36 5.64l1.42-1.42" />
    }
}

#[component]
pub fn MoonIcon() -> impl IntoView {
    view! { <StrokeIcon path_data="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" /> }
}

#[component]
pub fn MenuIcon() -> impl IntoView {
    view! { <StrokeIcon path_data="M3 12h18|M3 6h18|M3 18h18" size=24 /> }
}

#[component]
pub fn CloseIcon() -> impl IntoView {
    view! { <StrokeIcon path_data="M18 6L6 18|M6 6l12 12" size=24 /> }
}

#[component]
pub fn SearchIcon() -> impl IntoView {
    view! { <StrokeIcon path_data="M11 3a8 8 0 1 0 0 16 8 8 0 0 0 0-16z|M21 21l-4.35-4.35" /> }
}

#[component]
pub fn ChevronDownIcon() -> impl IntoView {
    view! { <StrokeIcon path_data="M6 9l6 6 6-6" size=24 /> }
}

#[component]
pub fn ExternalLinkIcon(#[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <StrokeIcon
            path_data="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6|M15 3h6v6|M10 14L21 3"
            size=size
        />
    }
}

#[component]
pub fn CalendarIcon() -> impl IntoView {
    view! {
        <StrokeIcon
            path_data="M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z|M16 2v4|M8 2v4|M3 10h18"
            size=14
        />
    }
}

#[component]
pub fn MailIcon() -> impl IntoView {
    view! {
        <StrokeIcon path_data="M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z|M22 6l-10 7L2 6" />
    }
}

#[component]
pub fn PhoneIcon() -> impl IntoView {
    view! {
        <StrokeIcon path_data="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.127.96.361 1.903.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.907.339 1.85.573 2.81.7A2 2 0 0 1 22 16.92z" />
    }
}

#[component]
pub fn MapPinIcon() -> impl IntoView {
    view! {
        <StrokeIcon path_data="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z|M12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6z" />
    }
}

#[component]
pub fn CheckCircleIcon() -> impl IntoView {
    view! { <StrokeIcon path_data="M22 11.08V12a10 10 0 1 1-5.93-9.14|M22 4L12 14.01l-3-3" /> }
}

#[component]
pub fn SendIcon() -> impl IntoView {
    view! { <StrokeIcon path_data="M22 2L11 13|M22 2l-7 20-4-9-9-4 20-7z" size=18 /> }
}

/// Brand glyph shell, filled
#[component]
fn BrandIcon(path_data: &'static str, #[prop(default = 20)] size: u32) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d=path_data></path>
        </svg>
    }
}

const GITHUB_PATH: &str = "M12 .5C5.65.5.5 5.65.5 12c0 5.08 3.29 9.39 7.86 10.91.58.1.79-.25.79-.55 0-.27-.01-1.17-.02-2.12-3.2.7-3.88-1.36-3.88-1.36-.52-1.33-1.28-1.68-1.28-1.68-1.04-.71.08-.7.08-.7 1.15.08 1.76 1.18 1.76 1.18 1.03 1.76 2.69 1.25 3.35.96.1-.75.4-1.25.72-1.54-2.55-.29-5.24-1.28-5.24-5.69 0-1.26.45-2.29 1.18-3.09-.12-.29-.51-1.46.11-3.05 0 0 .97-.31 3.17 1.18a11 11 0 0 1 5.78 0c2.2-1.49 3.17-1.18 3.17-1.18.62 1.59.23 2.76.11 3.05.74.8 1.18 1.83 1.18 3.09 0 4.42-2.69 5.39-5.26 5.67.41.36.78 1.06.78 2.14 0 1.54-.01 2.78-.01 3.16 0 .31.21.66.8.55A11.5 11.5 0 0 0 23.5 12C23.5 5.65 18.35.5 12 .5z";
const LINKEDIN_PATH: &str = "M20.45 20.45h-3.56v-5.57c0-1.33-.02-3.04-1.85-3.04-1.85 0-2.14 1.45-2.14 2.94v5.67H9.34V9h3.42v1.56h.05c.48-.9 1.64-1.85 3.37-1.85 3.6 0 4.27 2.37 4.27 5.46v6.28zM5.34 7.43a2.07 2.07 0 1 1 0-4.13 2.07 2.07 0 0 1 0 4.13zM7.12 20.45H3.55V9h3.57v11.45z";
const TWITTER_PATH: &str = "M23.95 4.57a10 10 0 0 1-2.82.77 4.96 4.96 0 0 0 2.16-2.72c-.95.56-2 .96-3.13 1.19a4.92 4.92 0 0 0-8.38 4.48A13.94 13.94 0 0 1 1.64 3.16a4.92 4.92 0 0 0 1.52 6.57 4.9 4.9 0 0 1-2.23-.62v.06a4.92 4.92 0 0 0 3.95 4.83 4.96 4.96 0 0 1-2.22.08 4.93 4.93 0 0 0 4.6 3.42A9.87 9.87 0 0 1 0 19.54a13.94 13.94 0 0 0 7.55 2.21c9.06 0 14.01-7.5 14.01-14.01 0-.21 0-.42-.02-.63a10 10 0 0 0 2.41-2.54z";
const INSTAGRAM_PATH: &str = "M12 2.16c3.2 0 3.58.01 4.85.07 3.25.15 4.77 1.69 4.92 4.92.06 1.27.07 1.65.07 4.85 0 3.2-.01 3.58-.07 4.85-.15 3.23-1.66 4.77-4.92 4.92-1.27.06-1.64.07-4.85.07-3.2 0-3.58-.01-4.85-.07-3.26-.15-4.77-1.7-4.92-4.92-.06-1.27-.07-1.64-.07-4.85 0-3.2.01-3.58.07-4.85C2.38 3.92 3.9 2.38 7.15 2.23 8.42 2.18 8.8 2.16 12 2.16zM12 0C8.74 0 8.33.01 7.05.07 2.7.27.27 2.69.07 7.05.01 8.33 0 8.74 0 12s.01 3.67.07 4.95c.2 4.36 2.62 6.78 6.98 6.98C8.33 23.99 8.74 24 12 24s3.67-.01 4.95-.07c4.35-.2 6.78-2.62 6.98-6.98.06-1.28.07-1.69.07-4.95s-.01-3.67-.07-4.95c-.2-4.35-2.62-6.78-6.98-6.98C15.67.01 15.26 0 12 0zm0 5.84A6.16 6.16 0 1 0 12 18.16 6.16 6.16 0 0 0 12 5.84zM12 16a4 4 0 1 1 0-8 4 4 0 0 1 0 8zm6.4-11.85a1.44 1.44 0 1 0 0 2.88 1.44 1.44 0 0 0 0-2.88z";

/// Resolve a social icon key; unknown keys fall back to the text label
#[component]
pub fn SocialIcon(icon: String, name: String) -> impl IntoView {
    match icon.as_str() {
        "github" => view! { <BrandIcon path_data=GITHUB_PATH /> }.into_any(),
        "linkedin" => view! { <BrandIcon path_data=LINKEDIN_PATH /> }.into_any(),
        "twitter" => view! { <BrandIcon path_data=TWITTER_PATH /> }.into_any(),
        "instagram" => view! { <BrandIcon path_data=INSTAGRAM_PATH /> }.into_any(),
        "mail" => view! { <MailIcon /> }.into_any(),
        _ => view! { <span>{name}</span> }.into_any(),
    }
}
