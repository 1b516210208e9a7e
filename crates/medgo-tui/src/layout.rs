//! Taffy Layout System for MedGo+
//!
//! Two trees are kept: the screen (a scrollable body above a one-row
//! footer) and the page, a column of three sections whose blocks are sized
//! from their wrapped text. Page rectangles are in page coordinates, with
//! row 0 at the top of the page rather than the terminal.

use medgo_core::content::{self, FEATURES};
use medgo_core::presets::{ButtonSize, ButtonStyle, ButtonVariant, CardStyle, CardVariant};
use medgo_core::tokens::{px_to_cols, px_to_rows, tokens};
use ratatui::layout::Rect;
use std::collections::HashMap;
use taffy::{
    geometry::{Rect as Edges, Size},
    style::{Dimension, FlexDirection, LengthPercentage, Style},
    NodeId, TaffyTree,
};

/// Rows taken by a button: label plus vertical padding
pub fn button_height(style: &ButtonStyle) -> u16 {
    1 + 2 * px_to_rows(style.padding_vertical).max(1)
}

/// Wrap `text` to `width` columns
pub fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    textwrap::wrap(text, width as usize)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

fn text_rows(text: &str, width: u16) -> u16 {
    wrap_lines(text, width).len() as u16
}

/// Feature card interior metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMetrics {
    pub pad_rows: u16,
    pub pad_cols: u16,
}

impl CardMetrics {
    pub fn feature() -> Self {
        let card = CardStyle::resolve(CardVariant::Highlight);
        Self {
            pad_rows: px_to_rows(tokens().spacing.md),
            pad_cols: px_to_cols(card.padding),
        }
    }

    /// Width left for the description inside a card `width` wide
    pub fn text_width(&self, width: u16) -> u16 {
        width.saturating_sub(2 + 2 * self.pad_cols)
    }

    /// Border, padding, icon row, title row and description
    pub fn height(&self, width: u16, description: &str) -> u16 {
        2 + 2 * self.pad_rows + 2 + text_rows(description, self.text_width(width))
    }
}

/// Named blocks of the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Logo,
    Tagline,
    Subtitle,
    GetStarted,
    Stats,
    FeaturesTitle,
    FeaturesSubtitle,
    FeatureCard(usize),
    CtaTitle,
    CtaSubtitle,
    BookButton,
    LearnMoreButton,
}

pub const LOGO_ROWS: u16 = 3;
pub const STATS_ROWS: u16 = 3;

/// Section paddings in rows and columns
#[derive(Debug, Clone, Copy)]
struct SectionInsets {
    vertical: u16,
    horizontal: u16,
    gap: u16,
}

impl SectionInsets {
    fn style(&self) -> Style {
        Style {
            flex_direction: FlexDirection::Column,
            flex_shrink: 0.0,
            padding: Edges {
                left: LengthPercentage::Length(self.horizontal as f32),
                right: LengthPercentage::Length(self.horizontal as f32),
                top: LengthPercentage::Length(self.vertical as f32),
                bottom: LengthPercentage::Length(self.vertical as f32),
            },
            gap: Size {
                width: LengthPercentage::Length(0.0),
                height: LengthPercentage::Length(self.gap as f32),
            },
            ..Default::default()
        }
    }
}

/// Computed page geometry for one terminal width
#[derive(Debug, Clone)]
pub struct PageLayout {
    pub width: u16,
    pub height: u16,
    pub header: Rect,
    pub features: Rect,
    pub cta: Rect,
    slots: HashMap<Slot, Rect>,
}

impl PageLayout {
    pub fn compute(width: u16) -> Result<Self, taffy::TaffyError> {
        let t = tokens();
        let mut taffy: TaffyTree<()> = TaffyTree::new();

        let header_insets = SectionInsets {
            vertical: px_to_rows(t.spacing.x5l),
            horizontal: px_to_cols(t.spacing.lg),
            gap: px_to_rows(t.spacing.md),
        };
        let section_insets = SectionInsets {
            vertical: px_to_rows(t.spacing.x4l),
            horizontal: px_to_cols(t.spacing.lg),
            gap: px_to_rows(t.spacing.md),
        };
        let inner = |insets: &SectionInsets| width.saturating_sub(2 * insets.horizontal);
        let header_width = inner(&header_insets);
        let section_width = inner(&section_insets);

        let button = button_height(&ButtonStyle::resolve(ButtonVariant::Accent, ButtonSize::Regular));
        let card = CardMetrics::feature();

        let header_blocks = vec![
            (Slot::Logo, LOGO_ROWS),
            (Slot::Tagline, text_rows(content::TAGLINE, header_width)),
            (Slot::Subtitle, text_rows(content::SUBTITLE, header_width)),
            (Slot::GetStarted, button),
            (Slot::Stats, STATS_ROWS),
        ];
        let mut feature_blocks = vec![
            (Slot::FeaturesTitle, text_rows(content::FEATURES_TITLE, section_width)),
            (Slot::FeaturesSubtitle, text_rows(content::FEATURES_SUBTITLE, section_width)),
        ];
        feature_blocks.extend(
            FEATURES
                .iter()
                .enumerate()
                .map(|(i, f)| (Slot::FeatureCard(i), card.height(section_width, f.description))),
        );
        let cta_blocks = vec![
            (Slot::CtaTitle, text_rows(content::CTA_TITLE, section_width)),
            (Slot::CtaSubtitle, text_rows(content::CTA_SUBTITLE, section_width)),
            (Slot::BookButton, button),
            (Slot::LearnMoreButton, button),
        ];

        let mut leaves: Vec<(Slot, NodeId, usize)> = Vec::new();
        let mut sections = Vec::new();
        for (index, (insets, blocks)) in [
            (header_insets, header_blocks),
            (section_insets, feature_blocks),
            (section_insets, cta_blocks),
        ]
        .into_iter()
        .enumerate()
        {
            let mut children = Vec::with_capacity(blocks.len());
            for (slot, rows) in blocks {
                let leaf = taffy.new_leaf(Style {
                    size: Size {
                        width: Dimension::Auto,
                        height: Dimension::Length(rows as f32),
                    },
                    flex_shrink: 0.0,
                    ..Default::default()
                })?;
                leaves.push((slot, leaf, index));
                children.push(leaf);
            }
            sections.push(taffy.new_with_children(insets.style(), &children)?);
        }

        let root = taffy.new_with_children(
            Style {
                size: Size {
                    width: Dimension::Length(width as f32),
                    height: Dimension::Auto,
                },
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
            &sections,
        )?;

        taffy.compute_layout(
            root,
            Size {
                width: taffy::AvailableSpace::Definite(width as f32),
                height: taffy::AvailableSpace::MaxContent,
            },
        )?;

        let mut section_rects = Vec::with_capacity(sections.len());
        for node in &sections {
            section_rects.push(to_rect(taffy.layout(*node)?, 0, 0));
        }
        let mut slots = HashMap::with_capacity(leaves.len());
        for (slot, leaf, section) in leaves {
            let parent = section_rects[section];
            slots.insert(slot, to_rect(taffy.layout(leaf)?, parent.x, parent.y));
        }

        let height = to_rect(taffy.layout(root)?, 0, 0).height;
        Ok(Self {
            width,
            height,
            header: section_rects[0],
            features: section_rects[1],
            cta: section_rects[2],
            slots,
        })
    }

    /// Block rectangle in page coordinates; empty for unknown slots
    pub fn slot(&self, slot: Slot) -> Rect {
        self.slots.get(&slot).copied().unwrap_or_default()
    }
}

fn to_rect(layout: &taffy::Layout, x: u16, y: u16) -> Rect {
    Rect {
        x: x + layout.location.x as u16,
        y: y + layout.location.y as u16,
        width: layout.size.width as u16,
        height: layout.size.height as u16,
    }
}

/// Screen rectangles: page viewport and footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenRects {
    pub body: Rect,
    pub footer: Rect,
}

/// Fixed screen split using Taffy
pub struct ScreenLayout {
    taffy: TaffyTree,
    root: NodeId,
    body: NodeId,
    footer: NodeId,
}

impl ScreenLayout {
    pub fn new() -> Result<Self, taffy::TaffyError> {
        let mut taffy = TaffyTree::new();

        let body = taffy.new_leaf(Style {
            size: Size {
                width: Dimension::Percent(1.0),
                height: Dimension::Auto,
            },
            flex_grow: 1.0,
            ..Default::default()
        })?;

        let footer = taffy.new_leaf(Style {
            size: Size {
                width: Dimension::Percent(1.0),
                height: Dimension::Length(1.0),
            },
            flex_shrink: 0.0,
            ..Default::default()
        })?;

        let root = taffy.new_with_children(
            Style {
                size: Size {
                    width: Dimension::Percent(1.0),
                    height: Dimension::Percent(1.0),
                },
                flex_direction: FlexDirection::Column,
                ..Default::default()
            },
            &[body, footer],
        )?;

        Ok(Self {
            taffy,
            root,
            body,
            footer,
        })
    }

    pub fn compute(&mut self, area: Rect) -> Result<ScreenRects, taffy::TaffyError> {
        self.taffy.compute_layout(
            self.root,
            Size {
                width: taffy::AvailableSpace::Definite(area.width as f32),
                height: taffy::AvailableSpace::Definite(area.height as f32),
            },
        )?;

        let body = to_rect(self.taffy.layout(self.body)?, area.x, area.y);
        let footer = to_rect(self.taffy.layout(self.footer)?, area.x, area.y);
        Ok(ScreenRects { body, footer })
    }
}
