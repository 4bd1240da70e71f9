use crate::LayoutError;
use crate::block::{BlockKind, LaidOutDocument, PositionedBlock, TextLine};
use crate::paginate::PageWriter;
use crate::wrap::wrap_run;
use chrono::NaiveDateTime;
use varsel_idf::{DocumentTree, TeamMember, keys};
use varsel_style::{PageLayout, TextStyle, Theme};
use varsel_types::MessageCatalog;

const SPACE_AFTER_HEADING: f32 = 8.0;
const SPACE_AFTER_PARAGRAPH: f32 = 6.0;
const SPACE_AFTER_LIST_ITEM: f32 = 2.0;
const DIVIDER_HEIGHT: f32 = 13.0;

// Same instant format the form's range picker displays
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Walks the document tree in fixed section order and paginates it.
///
/// The order (title, trip summary, member blocks, narrative, gear list,
/// warnings, footer) and the skip-if-empty rule for narrative fields are
/// external contracts; tests pin both.
pub struct LayoutEngine {
    page: PageLayout,
    theme: Theme,
}

impl LayoutEngine {
    pub fn new(page: PageLayout, theme: Theme) -> Self {
        Self { page, theme }
    }

    pub fn page_layout(&self) -> &PageLayout {
        &self.page
    }

    pub fn paginate(&self, tree: &DocumentTree) -> Result<LaidOutDocument, LayoutError> {
        let bounds = self.page.content_bounds();
        let width = bounds.width;
        let mut writer = PageWriter::new(bounds);

        writer.push(self.heading_block(tree, keys::DOCUMENT_TITLE, &self.theme.title, width)?);
        writer.push(self.summary_block(tree, width)?);

        for member in &tree.members {
            if member.position > 0 {
                // Dividers go between member cards only, never before the
                // leader or after the last member.
                writer.push(PositionedBlock::divider(width, DIVIDER_HEIGHT));
            }
            writer.push(self.member_block(tree, member, width)?);
        }

        for (label_key, text) in tree.narrative.sections() {
            match text {
                Some(text) if !text.trim().is_empty() => {
                    writer.push(self.narrative_block(tree, label_key, text, width)?);
                }
                _ => {} // empty narrative fields are skipped, not rendered blank
            }
        }

        if !tree.gear.is_empty() {
            writer.push(self.heading_block(tree, keys::EQUIPMENT, &self.theme.heading, width)?);
            for item in &tree.gear {
                let entry = format!("\u{2022} {}", item.label);
                writer.push(self.text_block(
                    tree,
                    BlockKind::ListItem,
                    vec![(&self.theme.list_item, entry)],
                    width,
                    SPACE_AFTER_LIST_ITEM,
                )?);
            }
            if let Some(number) = &tree.sat_phone_number {
                let line = labeled(&tree.catalog, keys::SAT_PHONE_LABEL, number);
                writer.push(self.text_block(
                    tree,
                    BlockKind::Paragraph,
                    vec![(&self.theme.strong, line)],
                    width,
                    SPACE_AFTER_PARAGRAPH,
                )?);
            }
        }

        if tree.has_warnings() {
            writer.push(self.heading_block(tree, keys::GEAR_WARNING, &self.theme.heading, width)?);
            for warning in &tree.warnings {
                writer.push(self.text_block(
                    tree,
                    BlockKind::ListItem,
                    vec![
                        (&self.theme.strong, warning.title.clone()),
                        (&self.theme.body, warning.description.clone()),
                    ],
                    width,
                    SPACE_AFTER_LIST_ITEM,
                )?);
            }
        }

        writer.push(self.text_block(
            tree,
            BlockKind::Paragraph,
            vec![(
                &self.theme.footer,
                tree.catalog.get(keys::DOCUMENT_FOOTER).to_string(),
            )],
            width,
            0.0,
        )?);

        let doc = writer.finish();
        log::debug!(
            "Laid out {} page(s), {} overflow diagnostic(s)",
            doc.page_count(),
            doc.overflows.len()
        );
        Ok(doc)
    }

    fn text_block(
        &self,
        tree: &DocumentTree,
        kind: BlockKind,
        runs: Vec<(&TextStyle, String)>,
        width: f32,
        space_after: f32,
    ) -> Result<PositionedBlock, LayoutError> {
        let mut lines: Vec<TextLine> = Vec::new();
        for (style, text) in runs {
            lines.extend(wrap_run(&text, style, &tree.fonts, width)?);
        }
        Ok(PositionedBlock::text(kind, lines, width, space_after))
    }

    fn heading_block(
        &self,
        tree: &DocumentTree,
        key: &str,
        style: &TextStyle,
        width: f32,
    ) -> Result<PositionedBlock, LayoutError> {
        self.text_block(
            tree,
            BlockKind::Heading,
            vec![(style, tree.catalog.get(key).to_string())],
            width,
            SPACE_AFTER_HEADING,
        )
    }

    /// Trip window and activity on one compact card near the top, where a
    /// rescuer looks first.
    fn summary_block(
        &self,
        tree: &DocumentTree,
        width: f32,
    ) -> Result<PositionedBlock, LayoutError> {
        let catalog = &tree.catalog;
        let mut runs = vec![(
            &self.theme.body,
            labeled(catalog, keys::TIME_RANGE_LABEL, &window_value(tree)),
        )];
        if let Some(activity) = &tree.activity {
            runs.push((
                &self.theme.body,
                labeled(catalog, keys::ACTIVITY_LABEL, activity.display(catalog)),
            ));
        }
        self.text_block(
            tree,
            BlockKind::Paragraph,
            runs,
            width,
            SPACE_AFTER_PARAGRAPH,
        )
    }

    /// One member card: heading line in the title family, detail lines in
    /// the body family. The card is atomic; it never splits across pages.
    fn member_block(
        &self,
        tree: &DocumentTree,
        member: &TeamMember,
        width: f32,
    ) -> Result<PositionedBlock, LayoutError> {
        let catalog = &tree.catalog;
        let mut runs = vec![(&self.theme.heading, member_heading(tree, member))];
        let details = [
            (keys::MEMBER_NAME_LABEL, member.name.as_deref()),
            (keys::MEMBER_CONTACT_LABEL, member.contact.as_deref()),
            (keys::MEMBER_MEDICAL_LABEL, member.medical_notes.as_deref()),
        ];
        for (label_key, value) in details {
            if let Some(value) = value {
                runs.push((&self.theme.body, labeled(catalog, label_key, value)));
            }
        }
        self.text_block(
            tree,
            BlockKind::Paragraph,
            runs,
            width,
            SPACE_AFTER_PARAGRAPH,
        )
    }

    fn narrative_block(
        &self,
        tree: &DocumentTree,
        label_key: &str,
        text: &str,
        width: f32,
    ) -> Result<PositionedBlock, LayoutError> {
        self.text_block(
            tree,
            BlockKind::Paragraph,
            vec![
                (&self.theme.strong, tree.catalog.get(label_key).to_string()),
                (&self.theme.body, text.to_string()),
            ],
            width,
            SPACE_AFTER_PARAGRAPH,
        )
    }
}

fn labeled(catalog: &MessageCatalog, label_key: &str, value: &str) -> String {
    format!("{}: {}", catalog.get(label_key), value)
}

fn member_heading(tree: &DocumentTree, member: &TeamMember) -> String {
    let catalog = &tree.catalog;
    if member.is_leader() {
        if tree.members.len() > 1 {
            format!(
                "{} ({})",
                catalog.get(keys::ABOUT_YOU),
                catalog.get(keys::TEAM_LEADER)
            )
        } else {
            catalog.get(keys::ABOUT_YOU).to_string()
        }
    } else {
        catalog.get(keys::MEMBER).to_string()
    }
}

fn window_value(tree: &DocumentTree) -> String {
    let catalog = &tree.catalog;
    match (tree.window.start, tree.window.end) {
        (None, None) => catalog.get(keys::NOT_SPECIFIED).to_string(),
        (start, end) => format!(
            "{} \u{2013} {}",
            instant_value(start, catalog),
            instant_value(end, catalog)
        ),
    }
}

fn instant_value(instant: Option<NaiveDateTime>, catalog: &MessageCatalog) -> String {
    match instant {
        Some(instant) => instant.format(DATE_FORMAT).to_string(),
        None => catalog.get(keys::NOT_SPECIFIED).to_string(),
    }
}
