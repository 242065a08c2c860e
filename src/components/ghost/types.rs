/// Face variants for the mascot. Each maps to a CSS class that swaps which
/// SVG features are visible; `styles.css` owns the actual look.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expression {
	Challenge,
	Interest,
	Pride,
	Celebration,
}

impl Expression {
	pub fn css_class(self) -> &'static str {
		match self {
			Expression::Challenge => "exp-challenge",
			Expression::Interest => "exp-interest",
			Expression::Pride => "exp-pride",
			Expression::Celebration => "exp-celebration",
		}
	}
}

/// Interactive elements that make the mascot speak. Each key carries its
/// canned line and the face to pull while saying it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeakKey {
	MoreProjects,
	ArcadeProject,
	WebDevCertificate,
	UxCertificate,
	GameDevCertificate,
	GithubContact,
	EmailContact,
	LinkedinContact,
	HireMe,
}

impl SpeakKey {
	pub fn phrase(self) -> &'static str {
		match self {
			SpeakKey::MoreProjects => "More projects are on their way!",
			SpeakKey::ArcadeProject => "So much fun to play. Such a pain to build...",
			SpeakKey::WebDevCertificate => "A lot of late nights went into this one. Worth every single bug!",
			SpeakKey::UxCertificate => "Loved this course! A great addition to the toolbox!",
			SpeakKey::GameDevCertificate => "Proud of this one. Click it to have a look!",
			SpeakKey::GithubContact => "The code lives here!",
			SpeakKey::EmailContact => "Send me a message!",
			SpeakKey::LinkedinContact => "Follow me for more...",
			SpeakKey::HireMe => "\u{2728} Hire this dev! \u{2728}",
		}
	}

	pub fn expression(self) -> Expression {
		match self {
			SpeakKey::MoreProjects => Expression::Pride,
			SpeakKey::ArcadeProject => Expression::Challenge,
			SpeakKey::WebDevCertificate => Expression::Challenge,
			SpeakKey::UxCertificate => Expression::Pride,
			SpeakKey::GameDevCertificate => Expression::Pride,
			SpeakKey::GithubContact => Expression::Pride,
			SpeakKey::EmailContact => Expression::Interest,
			SpeakKey::LinkedinContact => Expression::Interest,
			SpeakKey::HireMe => Expression::Celebration,
		}
	}

	/// Only the hire pitch gets the confetti treatment.
	pub fn celebrates(self) -> bool {
		self.expression() == Expression::Celebration
	}
}
