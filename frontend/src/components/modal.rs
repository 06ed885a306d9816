use leptos::*;

/// Dialog with a title bar and a close ("×") button.
///
/// Clicking the backdrop or the close button calls `on_close`.
#[component]
pub fn Modal(
    title: &'static str,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let close = move |_| on_close.call(());

    view! {
        <div class="modal-backdrop" on:click=close>
            <div class="modal" role="dialog" aria-label=title on:click=|e| e.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button type="button" class="modal-close" aria-label="Close" on:click=close>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
