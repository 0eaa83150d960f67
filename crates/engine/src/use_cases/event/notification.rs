//! Event notification text.

use vidaloka_domain::Event;

/// `"{title}\n\n{description}\n\nA. ...\nB. ..."`
pub fn format_event_notification(event: &Event) -> String {
    let options = event
        .lettered_options()
        .map(|(letter, option)| format!("{letter}. {}", option.description))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n{}\n\n{}", event.title, event.description, options)
}
