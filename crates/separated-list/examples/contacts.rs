//! Separated List Contacts Example
//!
//! Builds an address book grouped by relationship and prints each row the
//! way a list view would render it:
//! - Section headers come from a shared header template
//! - Each section is an independent adapter with its own row layout
//! - Adding a contact to one section refreshes the whole list
//!
//! Run with: cargo run -p separated-list --example contacts

use std::sync::Arc;

use separated_list::adapter::{
    ArrayAdapter, LayoutId, ListAdapter, RowTemplate, SeparatedListAdapter, SlotId, ViewContainer,
};
use separated_list::{AdapterError, AdapterResult};

const HEADER_LAYOUT: LayoutId = LayoutId(1);
const CONTACT_LAYOUT: LayoutId = LayoutId(2);
const STARRED_LAYOUT: LayoutId = LayoutId(3);

/// Text console standing in for a widget toolkit.
struct Console {
    inflated: usize,
}

/// One rendered console line.
struct Line {
    layout: LayoutId,
    text: String,
}

impl ViewContainer for Console {
    type View = Line;

    fn inflate(&mut self, layout: LayoutId) -> Line {
        self.inflated += 1;
        Line {
            layout,
            text: String::new(),
        }
    }

    fn bind_text(&mut self, view: &mut Line, slot: SlotId, text: &str) -> AdapterResult<()> {
        if slot != SlotId::TEXT {
            return Err(AdapterError::MissingTextSlot {
                layout: view.layout,
                slot,
            });
        }
        view.text.clear();
        view.text.push_str(text);
        Ok(())
    }
}

#[derive(Clone)]
struct Contact {
    name: &'static str,
    phone: &'static str,
}

fn render(list: &SeparatedListAdapter<Console>, console: &mut Console) -> AdapterResult<()> {
    for position in 0..list.count() {
        let Some(line) = list.view_for_item(position, None, console)? else {
            continue;
        };
        match line.layout {
            HEADER_LAYOUT => println!("== {} ==", line.text),
            STARRED_LAYOUT => println!("  * {}", line.text),
            _ => println!("    {}", line.text),
        }
    }
    Ok(())
}

fn main() -> AdapterResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "separated_list=debug".into()),
        )
        .init();

    let header = RowTemplate::from_toml_str("layout = 1\ntext_slot = 1\n")?;
    let list = SeparatedListAdapter::<Console>::with_template(header);

    let favourites = Arc::new(ArrayAdapter::new(
        RowTemplate::new(STARRED_LAYOUT),
        vec!["Ada".to_string(), "Grace".to_string()],
    ));
    let family = Arc::new(ArrayAdapter::with_extractor(
        RowTemplate::new(CONTACT_LAYOUT),
        vec![
            Contact {
                name: "Mum",
                phone: "555-0100",
            },
            Contact {
                name: "Sam",
                phone: "555-0142",
            },
        ],
        |contact: &Contact| format!("{} ({})", contact.name, contact.phone).into(),
    ));
    let work: Arc<ArrayAdapter<String>> = Arc::new(ArrayAdapter::empty(RowTemplate::new(
        CONTACT_LAYOUT,
    )));

    list.add_section("Favourites", favourites)?;
    list.add_section("Family", family.clone())?;
    list.add_section("Work", work.clone())?;

    if let Err(err) = list.add_section("Family", family.clone()) {
        println!("skipped: {err}");
    }

    list.signals().changed.connect(|_| println!("-- list changed --"));

    let mut console = Console { inflated: 0 };
    render(&list, &mut console)?;

    work.push("Linus".to_string());
    family.push(Contact {
        name: "Kim",
        phone: "555-0199",
    });
    render(&list, &mut console)?;

    println!(
        "{} rows, {} view types, {} views inflated",
        list.count(),
        list.view_type_count(),
        console.inflated
    );
    Ok(())
}
