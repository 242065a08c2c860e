use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="not-found">
			<h1 class="neon-title">"404"</h1>
			<p>"Nothing glows here. " <a href="/">"Back to the portfolio"</a></p>
		</main>
	}
}
