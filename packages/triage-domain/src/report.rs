use crate::ranking::ScoredCandidate;

/// Substituted with the candidate's ticket id when rendering links.
pub const TICKET_ID_PLACEHOLDER: &str = "{ticket_id}";

pub const DEFAULT_MAX_ENTRIES: usize = 3;

#[derive(Clone, Debug)]
pub struct ReportOptions {
	/// Upper bound on rendered entries; the ranked list is never reordered.
	pub max_entries: usize,
	/// Link target per entry, e.g.
	/// `https://desk.example.com/tickets/{ticket_id}`.
	pub link_template: String,
}

impl ReportOptions {
	pub fn new(link_template: impl Into<String>) -> Self {
		Self { max_entries: DEFAULT_MAX_ENTRIES, link_template: link_template.into() }
	}

	pub fn with_max_entries(mut self, max_entries: usize) -> Self {
		self.max_entries = max_entries;
		self
	}
}

/// Renders the top ranked matches as an HTML list, one line per match with
/// a link to the ticket and its score to two decimals. Fewer entries than
/// `max_entries` renders them all; an empty ranking renders an empty list.
pub fn render_report(ranked: &[ScoredCandidate], opts: &ReportOptions) -> String {
	let mut out = String::from("<ul>");

	for candidate in ranked.iter().take(opts.max_entries) {
		let link = opts.link_template.replace(TICKET_ID_PLACEHOLDER, &candidate.ticket_id);

		out.push_str(&format!(
			"<li><a href=\"{link}\" target=\"_blank\">{}</a> - Similarity score: {:.2}</li>\n",
			candidate.display_name, candidate.score,
		));
	}

	out.push_str("</ul>");

	out
}
