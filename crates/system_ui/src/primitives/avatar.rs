use std::time::Duration;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Loading progress of an avatar image.
pub enum ImageLoadingStatus {
    /// No image has been requested.
    Idle,
    /// The image is loading.
    Loading,
    /// The image loaded and is displayed.
    Loaded,
    /// The image failed to load or had no source.
    Error,
}

impl Default for ImageLoadingStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl ImageLoadingStatus {
    pub(crate) fn for_source(src: &str) -> Self {
        if src.trim().is_empty() {
            Self::Error
        } else {
            Self::Loading
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Copy)]
struct AvatarContext {
    status: RwSignal<ImageLoadingStatus>,
}

fn use_avatar() -> AvatarContext {
    use_context::<AvatarContext>().expect("avatar parts must be rendered inside Avatar")
}

#[component]
/// Circular frame holding an avatar image and its fallback.
pub fn Avatar(
    #[prop(optional, into)] class: Option<String>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    let status = create_rw_signal(ImageLoadingStatus::Idle);
    provide_context(AvatarContext { status });

    view! {
        <span
            class=merge_class(styles::AVATAR, class.as_deref())
            data-slot="avatar"
            data-status=move || status.get().token()
            {..attrs}
        >
            {children()}
        </span>
    }
}

#[component]
/// Avatar image. Stays hidden until it has loaded.
///
/// An empty `src` is treated as a failed load so the fallback remains visible.
pub fn AvatarImage(
    #[prop(into)] src: String,
    #[prop(optional, into)] alt: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] on_loading_status_change: Option<Callback<ImageLoadingStatus>>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
) -> impl IntoView {
    let AvatarContext { status } = use_avatar();
    let report = move |next: ImageLoadingStatus| {
        status.set(next);
        if let Some(on_loading_status_change) = on_loading_status_change {
            on_loading_status_change.call(next);
        }
    };
    report(ImageLoadingStatus::for_source(&src));

    let failed_src = src.clone();
    view! {
        <img
            src=src
            alt=alt
            class=merge_class(styles::AVATAR_IMAGE, class.as_deref())
            data-slot="avatar-image"
            hidden=move || status.get() != ImageLoadingStatus::Loaded
            on:load=move |_| report(ImageLoadingStatus::Loaded)
            on:error=move |_| {
                logging::warn!("avatar image failed to load: {failed_src}");
                report(ImageLoadingStatus::Error);
            }
            {..attrs}
        />
    }
}

#[component]
/// Placeholder content shown until the avatar image has loaded.
///
/// With `delay_ms` set, the fallback waits that long before rendering so fast
/// loads do not flash it.
pub fn AvatarFallback(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] delay_ms: Option<u64>,
    #[prop(attrs)] attrs: Vec<(&'static str, Attribute)>,
    children: ChildrenFn,
) -> impl IntoView {
    let AvatarContext { status } = use_avatar();
    let delay_elapsed = create_rw_signal(delay_ms.is_none());
    if let Some(delay_ms) = delay_ms {
        if let Ok(timeout) = set_timeout_with_handle(
            move || delay_elapsed.set(true),
            Duration::from_millis(delay_ms),
        ) {
            on_cleanup(move || timeout.clear());
        }
    }
    let class = store_value(merge_class(styles::AVATAR_FALLBACK, class.as_deref()));
    let attrs = store_value(attrs);
    let children = store_value(children);

    view! {
        <Show
            when=move || delay_elapsed.get() && status.get() != ImageLoadingStatus::Loaded
            fallback=|| ()
        >
            <span class=class.get_value() data-slot="avatar-fallback" {..attrs.get_value()}>
                {children.with_value(|children| children())}
            </span>
        </Show>
    }
}
