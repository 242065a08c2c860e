use std::rc::Rc;

use leptos::prelude::*;

use crate::components::circuit::CircuitCanvas;
use crate::components::ghost::{CanvasConfetti, Ghost, SpeakKey, SpeechBubble, SpeechBubbleState};
use crate::components::projects::{CertificateCard, ProjectCard};

/// Contact link that makes the mascot speak while hovered.
#[component]
fn ContactLink(
	#[prop(into)] href: String,
	#[prop(into)] label: String,
	speak: SpeakKey,
) -> impl IntoView {
	let state = expect_context::<SpeechBubbleState>();
	let enter = move |_| state.speak(speak);
	let leave = move |_| state.quiet();

	view! {
		<a
			class="contact-link"
			href=href
			target="_blank"
			rel="noreferrer"
			on:mouseenter=enter
			on:mouseleave=leave
		>
			{label}
		</a>
	}
}

/// Portfolio Home Page
#[component]
pub fn Home() -> impl IntoView {
	let bubble = SpeechBubbleState::new(Rc::new(CanvasConfetti::new()));
	provide_context(bubble);

	let hire_enter = move |_| bubble.speak(SpeakKey::HireMe);
	let hire_leave = move |_| bubble.quiet();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-stage">
				<CircuitCanvas />
				<div class="stage-overlay">
					<header class="hero">
						<Ghost />
						<SpeechBubble />
						<h1 class="neon-title">"Sam Duarte"</h1>
						<p class="subtitle">
							"Front-end developer with a soft spot for things that glow."
						</p>
					</header>

					<section class="panel" id="projects">
						<h2>"Projects"</h2>
						<div class="card-grid">
							<ProjectCard
								title="Neon Arcade"
								summary="A browser arcade cabinet with a handful of retro minigames."
								speak=Some(SpeakKey::ArcadeProject)
							>
								<p>
									"Canvas-rendered sprites, a tiny fixed-step game loop, and a "
									"high-score table that lives in local storage. The hardest part "
									"was making collisions feel fair at 60fps."
								</p>
								<ul class="tech-list">
									<li>"Canvas 2D"</li>
									<li>"WebAssembly"</li>
									<li>"Local storage"</li>
								</ul>
							</ProjectCard>

							<ProjectCard
								title="This Page"
								summary="The circuit board behind this text is drawn live, every frame."
							>
								<p>
									"The background regenerates a randomized circuit layout on every "
									"resize and keeps light pulses traveling along the traces. "
									"Refresh for a new board."
								</p>
								<ul class="tech-list">
									<li>"Leptos"</li>
									<li>"requestAnimationFrame"</li>
									<li>"Radial gradients"</li>
								</ul>
							</ProjectCard>

							<ProjectCard
								title="Something New"
								summary="The next project is still on the workbench."
								speak=Some(SpeakKey::MoreProjects)
								coming_soon=true
							>
								<p>"Patience!"</p>
							</ProjectCard>
						</div>
					</section>

					<section class="panel" id="certificates">
						<h2>"Certificates"</h2>
						<div class="card-grid">
							<CertificateCard
								title="Responsive Web Design"
								issuer="freeCodeCamp"
								href="assets/cert-web-design.pdf"
								speak=SpeakKey::WebDevCertificate
							/>
							<CertificateCard
								title="UX Foundations"
								issuer="Interaction Design Foundation"
								href="assets/cert-ux.pdf"
								speak=SpeakKey::UxCertificate
							/>
							<CertificateCard
								title="Game Development Basics"
								issuer="Coursera"
								href="assets/cert-gamedev.pdf"
								speak=SpeakKey::GameDevCertificate
							/>
						</div>
					</section>

					<footer class="panel contact" id="contact">
						<h2>"Contact"</h2>
						<nav class="contact-links">
							<ContactLink
								href="https://github.com/samduarte"
								label="GitHub"
								speak=SpeakKey::GithubContact
							/>
							<ContactLink
								href="mailto:sam@samduarte.dev"
								label="Email"
								speak=SpeakKey::EmailContact
							/>
							<ContactLink
								href="https://www.linkedin.com/in/samduarte"
								label="LinkedIn"
								speak=SpeakKey::LinkedinContact
							/>
						</nav>
						<a
							class="btn btn-hire"
							href="assets/resume.pdf"
							download="resume.pdf"
							on:mouseenter=hire_enter
							on:mouseleave=hire_leave
						>
							"Download resume"
						</a>
					</footer>
				</div>
			</div>
		</ErrorBoundary>
	}
}
