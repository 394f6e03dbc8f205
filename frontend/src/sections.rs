//! Page sections, top to bottom.

use crate::App;
use crate::theme;
use devport_core::SectionId;
use devport_core::content::{Experience, HeroAction, Project, Skill, SkillCategory, SocialLink};
use zoon::*;

pub const HOME: SectionId = SectionId::from_static("home");
pub const ABOUT: SectionId = SectionId::from_static("about");
pub const EXPERIENCE: SectionId = SectionId::from_static("experience");
pub const PROJECTS: SectionId = SectionId::from_static("projects");
pub const CONTACT: SectionId = SectionId::from_static("contact");

/// Sections in the order `App::root` renders them.
pub const RENDERED: [SectionId; 5] = [HOME, ABOUT, EXPERIENCE, PROJECTS, CONTACT];

fn flex_cell(basis_px: u32) -> String {
    format!("1 1 {basis_px}px")
}

impl App {
    /// Full-width band carrying the section id the tracker measures.
    fn section<T: Element>(&self, id: SectionId, background: Rgba, content: T) -> impl Element + use<T> {
        El::new()
            .s(Width::fill())
            .s(Background::new().color(background))
            .s(Padding::new().x(16).top(96).bottom(96))
            .update_raw_el(move |raw_el| raw_el.attr("id", id.as_str()))
            .child(
                El::new()
                    .s(Width::fill().max(theme::CONTENT_MAX_WIDTH_PX))
                    .s(Align::new().center_x())
                    .child(content),
            )
    }

    fn section_heading(&self, id: &SectionId) -> impl Element + use<> {
        let (index, title) = self.portfolio.section_title(id).unwrap_or((0, id.as_str()));
        Row::new()
            .s(Gap::new().x(8))
            .s(Font::new().size(30).weight(FontWeight::Bold).color(theme::heading_text()))
            .item(
                El::new()
                    .s(Font::new().color(theme::accent()))
                    .child(format!("{index:02}.")),
            )
            .item(El::new().child(title.to_owned()))
    }

    pub(crate) fn home_section(&self) -> impl Element + use<> {
        let profile = &self.portfolio.profile;
        self.section(
            HOME,
            theme::page_background(),
            Column::new()
                .s(Align::new().center_x())
                .s(Gap::new().y(24))
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("min-height", "calc(100vh - 192px)")
                        .style("justify-content", "center")
                        .style("text-align", "center")
                })
                .item(profile.availability.as_deref().map(availability_badge))
                .item(
                    Column::new()
                        .s(Align::new().center_x())
                        .s(Font::new().size(56).weight(FontWeight::Bold).color(theme::heading_text()))
                        .item(El::new().s(Align::new().center_x()).child(profile.headline.as_str()))
                        .item(
                            Row::new()
                                .s(Align::new().center_x())
                                .s(Gap::new().x(16))
                                .multiline()
                                .item(El::new().s(Font::new().color(theme::accent())).child(profile.role.as_str()))
                                .item(El::new().child(profile.name.as_str())),
                        ),
                )
                .item(
                    Column::new()
                        .s(Align::new().center_x())
                        .s(Gap::new().y(4))
                        .s(Font::new().size(20).color(theme::muted_text()))
                        .items(
                            profile
                                .summary
                                .iter()
                                .map(|line| Paragraph::new().s(Align::new().center_x()).content(line.as_str())),
                        ),
                )
                .item(
                    Row::new()
                        .s(Align::new().center_x())
                        .s(Gap::new().x(16).y(12))
                        .multiline()
                        .items(profile.actions.iter().map(|action| self.hero_button(action))),
                ),
        )
    }

    fn hero_button(&self, action: &'static HeroAction) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        let primary = action.primary;
        Button::new()
            .s(Padding::new().x(32).y(12))
            .s(RoundedCorners::all(8))
            .s(Font::new().size(16).weight(FontWeight::Medium).color(if primary {
                theme::surface()
            } else {
                theme::heading_text()
            }))
            .s(Background::new().color_signal(hovered.signal().map(move |hovered| {
                match (primary, hovered) {
                    (true, true) => theme::accent_hover(),
                    (true, false) => theme::accent(),
                    (false, true) => theme::hover_surface(),
                    (false, false) => theme::surface(),
                }
            })))
            .s(Borders::all(Border::new().color(if primary { theme::accent() } else { theme::border() }).width(1)))
            .label(if primary {
                format!("{} →", action.label)
            } else {
                action.label.clone()
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .on_press(self.navigate_on_press(&action.target))
    }

    pub(crate) fn about_section(&self) -> impl Element + use<> {
        self.section(
            ABOUT,
            theme::surface(),
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(64).y(48))
                .s(Align::new().top())
                .multiline()
                .item(self.bio_column())
                .item(self.tech_stack_panel()),
        )
    }

    fn bio_column(&self) -> impl Element + use<> {
        let profile = &self.portfolio.profile;
        Column::new()
            .s(Gap::new().y(24))
            .s(Align::new().top())
            .update_raw_el(|raw_el| raw_el.style("flex", &flex_cell(420)))
            .item(
                El::new()
                    .s(Width::exact(288))
                    .s(Height::exact(288))
                    .s(RoundedCorners::all(16))
                    .s(Borders::all(Border::new().color(theme::border()).width(1)))
                    .s(Background::new().color(theme::surface()))
                    .s(Font::new().color(theme::muted_text()))
                    .child(El::new().s(Align::center()).child("Profile Image")),
            )
            .item(self.section_heading(&ABOUT))
            .items(profile.bio.iter().map(|paragraph| {
                Paragraph::new()
                    .s(Font::new().size(17).color(theme::body_text()))
                    .content(paragraph.as_str())
            }))
            .item(profile.resume.as_ref().map(|resume| {
                Link::new()
                    .s(Font::new().weight(FontWeight::SemiBold).color(theme::accent()))
                    .label(resume.label.as_str())
                    .to(resume.url.as_str())
            }))
    }

    fn tech_stack_panel(&self) -> impl Element + use<> {
        Column::new()
            .s(Gap::new().y(32))
            .s(Padding::all(32))
            .s(RoundedCorners::all(16))
            .s(Background::new().color(theme::page_background()))
            .s(Borders::all(Border::new().color(theme::hover_surface()).width(1)))
            .update_raw_el(|raw_el| raw_el.style("flex", &flex_cell(420)))
            .item(
                El::new()
                    .s(Font::new().size(20).weight(FontWeight::Bold).color(theme::heading_text()))
                    .child("Tech Stack"),
            )
            .items(self.portfolio.skills.iter().map(skill_category))
    }

    pub(crate) fn experience_section(&self) -> impl Element + use<> {
        self.section(
            EXPERIENCE,
            theme::page_background(),
            Column::new()
                .s(Width::fill().max(896))
                .s(Align::new().center_x())
                .s(Gap::new().y(64))
                .item(El::new().s(Align::new().center_x()).child(self.section_heading(&EXPERIENCE)))
                .item(
                    Column::new()
                        .s(Gap::new().y(48))
                        .s(Borders::new().left(Border::new().color(theme::border()).width(2)))
                        .items(
                            self.portfolio
                                .experience
                                .iter()
                                .enumerate()
                                .map(|(index, entry)| experience_entry(entry, index == 0)),
                        ),
                ),
        )
    }

    pub(crate) fn projects_section(&self) -> impl Element + use<> {
        self.section(
            PROJECTS,
            theme::surface(),
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(48))
                .item(self.section_heading(&PROJECTS))
                .item(
                    Row::new()
                        .s(Width::fill())
                        .s(Gap::new().x(32).y(32))
                        .multiline()
                        .items(self.portfolio.projects.iter().map(project_card)),
                )
                .item(self.portfolio.more_projects.as_ref().map(|more| {
                    Link::new()
                        .s(Align::new().center_x())
                        .s(Font::new().weight(FontWeight::Medium).color(theme::accent()))
                        .label(format!("{} →", more.label))
                        .to(more.url.as_str())
                })),
        )
    }

    pub(crate) fn contact_section(&self) -> impl Element + use<> {
        let contact = &self.portfolio.contact;
        let (index, eyebrow) = self
            .portfolio
            .section_title(&CONTACT)
            .unwrap_or((0, CONTACT.as_str()));
        self.section(
            CONTACT,
            theme::page_background(),
            Column::new()
                .s(Width::fill().max(672))
                .s(Align::new().center_x())
                .s(Gap::new().y(24))
                .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new()
                            .weight(FontWeight::SemiBold)
                            .color(theme::accent())
                            .family([FontFamily::new("JetBrains Mono"), FontFamily::Monospace]))
                        .child(format!("{index:02}. {eyebrow}")),
                )
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new().size(48).weight(FontWeight::Bold).color(theme::heading_text()))
                        .child(contact.heading.as_str()),
                )
                .item(
                    Paragraph::new()
                        .s(Font::new().size(18).color(theme::body_text()))
                        .content(contact.message.as_str()),
                )
                .item(mail_button(contact.email_label.as_str(), self.portfolio.mailto()))
                .item(
                    Row::new()
                        .s(Align::new().center_x())
                        .s(Gap::new().x(32))
                        .s(Padding::new().top(56))
                        .items(contact.socials.iter().map(social_link)),
                )
                .item(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new().size(14).color(theme::muted_text()))
                        .child(contact.footer.as_str()),
                ),
        )
    }
}

fn availability_badge(text: &'static str) -> impl Element {
    Row::new()
        .s(Align::new().center_x())
        .s(Gap::new().x(8))
        .s(Padding::new().x(12).y(4))
        .s(RoundedCorners::all(999))
        .s(Borders::all(Border::new().color(color!("#c7d2fe")).width(1)))
        .s(Background::new().color(theme::accent_soft()))
        .s(Font::new().size(14).weight(FontWeight::Medium).color(theme::accent()))
        .item(
            El::new()
                .s(Width::exact(8))
                .s(Height::exact(8))
                .s(RoundedCorners::all(999))
                .s(Background::new().color(theme::accent())),
        )
        .item(text)
}

fn skill_category(category: &'static SkillCategory) -> impl Element {
    Column::new()
        .s(Gap::new().y(16))
        .item(
            El::new()
                .s(Padding::new().left(4))
                .s(Font::new().size(14).weight(FontWeight::Bold).color(theme::muted_text()))
                .update_raw_el(|raw_el| raw_el.style("text-transform", "uppercase").style("letter-spacing", "0.05em"))
                .child(category.name.as_str()),
        )
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(12).y(12))
                .multiline()
                .items(category.skills.iter().map(skill_badge)),
        )
}

/// Card with icon, name, level pill and a gauge filled per level.
fn skill_badge(skill: &'static Skill) -> impl Element {
    let hovered = Mutable::new(false);
    let (level_text, level_background) = theme::emphasis_colors(skill.level.emphasis());
    let tint = format!("color-mix(in srgb, {} 12%, transparent)", skill.color);
    Column::new()
        .s(Padding::all(14))
        .s(Gap::new().y(12))
        .s(RoundedCorners::all(12))
        .s(Background::new().color(theme::surface()))
        .s(Borders::all(Border::new().color(theme::border()).width(1)))
        .s(Shadows::with_signal(hovered.signal().map_bool(
            || [Shadow::new().color(color!("rgba(15, 23, 42, 0.1)")).y(4).blur(12)],
            || [Shadow::new().color(color!("rgba(15, 23, 42, 0.05)")).y(1).blur(2)],
        )))
        .update_raw_el(|raw_el| raw_el.style("flex", &flex_cell(220)))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(8))
                .item(
                    El::new()
                        .s(Padding::all(6))
                        .s(RoundedCorners::all(8))
                        .s(Font::new().size(14).weight(FontWeight::Bold))
                        .update_raw_el(move |raw_el| {
                            raw_el.style("background-color", &tint).style("color", &skill.color)
                        })
                        .child(skill.icon.glyph()),
                )
                .item(
                    El::new()
                        .s(Font::new().size(14).weight(FontWeight::SemiBold).color(theme::body_text()).no_wrap())
                        .child(skill.name.as_str()),
                )
                .item(
                    El::new()
                        .s(Align::new().right())
                        .s(Padding::new().x(8).y(2))
                        .s(RoundedCorners::all(999))
                        .s(Font::new().size(10).weight(FontWeight::Bold).color(level_text))
                        .s(Background::new().color(level_background))
                        .update_raw_el(|raw_el| raw_el.style("text-transform", "uppercase"))
                        .child(skill.level.label()),
                ),
        )
        .item(
            El::new()
                .s(Width::fill())
                .s(Height::exact(6))
                .s(RoundedCorners::all(999))
                .s(Background::new().color(theme::hover_surface()))
                .s(Clip::both())
                .child(
                    El::new()
                        .s(Width::percent(f64::from(skill.level.gauge_percent())))
                        .s(Height::fill())
                        .s(RoundedCorners::all(999))
                        .update_raw_el(move |raw_el| {
                            raw_el
                                .style("background-color", &skill.color)
                                .style("opacity", "0.8")
                                .style("transition", "width 1s ease-out")
                        }),
                ),
        )
}

fn experience_entry(entry: &'static Experience, current: bool) -> impl Element {
    let marker = if current { theme::accent() } else { theme::muted_text() };
    Column::new()
        .s(Gap::new().y(8))
        .s(Padding::new().left(40))
        .update_raw_el(|raw_el| raw_el.style("position", "relative"))
        .item(
            El::new()
                .s(Width::exact(20))
                .s(Height::exact(20))
                .s(RoundedCorners::all(999))
                .s(Background::new().color(marker))
                .s(Borders::all(Border::new().color(theme::surface()).width(4)))
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("position", "absolute")
                        .style("left", "-11px")
                        .style("top", "0")
                }),
        )
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(16))
                .multiline()
                .item(
                    El::new()
                        .s(Font::new().size(20).weight(FontWeight::Bold).color(theme::heading_text()))
                        .child(entry.role.as_str()),
                )
                .item(
                    El::new()
                        .s(Align::new().right())
                        .s(Font::new()
                            .size(14)
                            .color(theme::muted_text())
                            .family([FontFamily::new("JetBrains Mono"), FontFamily::Monospace]))
                        .child(entry.period.as_str()),
                ),
        )
        .item(
            El::new()
                .s(Font::new().weight(FontWeight::Medium).color(theme::accent()))
                .child(entry.company.as_str()),
        )
        .item(
            Column::new()
                .s(Gap::new().y(8))
                .s(Padding::new().left(16).y(8))
                .s(Font::new().size(14).color(theme::body_text()))
                .items(
                    entry
                        .highlights
                        .iter()
                        .map(|highlight| Paragraph::new().content("• ").content(highlight.as_str())),
                ),
        )
        .item(tag_row(&entry.stack, false))
}

fn tag_row(tags: &'static [String], accented: bool) -> impl Element {
    Row::new()
        .s(Gap::new().x(8).y(8))
        .multiline()
        .items(tags.iter().map(move |tag| {
            El::new()
                .s(Padding::new().x(8).y(4))
                .s(RoundedCorners::all(4))
                .s(Font::new().size(12).weight(FontWeight::Medium).color(if accented {
                    theme::accent()
                } else {
                    theme::body_text()
                }))
                .s(Background::new().color(if accented {
                    theme::accent_soft()
                } else {
                    theme::surface()
                }))
                .s(Borders::all(Border::new().color(if accented {
                    theme::accent_soft()
                } else {
                    theme::border()
                }).width(1)))
                .child(tag.as_str())
        }))
}

fn project_card(project: &'static Project) -> impl Element {
    let hovered = Mutable::new(false);
    Column::new()
        .s(RoundedCorners::all(12))
        .s(Clip::both())
        .s(Background::new().color(theme::surface()))
        .s(Borders::all_signal(hovered.signal().map_bool(
            || Border::new().color(theme::accent()).width(1),
            || Border::new().color(theme::border()).width(1),
        )))
        .s(Transform::with_signal_self(
            hovered.signal().map_bool(|| Some(Transform::new().move_up(8)), || None),
        ))
        .update_raw_el(|raw_el| raw_el.style("flex", &flex_cell(300)).style("transition", "all 0.3s"))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .item(
            El::new()
                .s(Width::fill())
                .s(Height::exact(192))
                .s(Background::new().color(theme::page_background()))
                .s(Borders::new().bottom(Border::new().color(theme::hover_surface()).width(1)))
                .s(Font::new().size(40).color(theme::muted_text()))
                .child(El::new().s(Align::center()).child(project.icon.glyph())),
        )
        .item(
            Column::new()
                .s(Padding::all(24))
                .s(Gap::new().y(16))
                .item(
                    Row::new()
                        .s(Width::fill())
                        .s(Gap::new().x(12))
                        .item(
                            El::new()
                                .s(Font::new().size(20).weight(FontWeight::Bold).color(theme::heading_text()))
                                .child(project.title.as_str()),
                        )
                        .item(
                            Row::new()
                                .s(Align::new().right())
                                .s(Gap::new().x(12))
                                .item(project.repository_url.as_deref().map(|url| project_link("GitHub", url)))
                                .item(project.live_url.as_deref().map(|url| project_link("↗", url))),
                        ),
                )
                .item(
                    Paragraph::new()
                        .s(Font::new().size(14).color(theme::body_text()))
                        .content(project.description.as_str()),
                )
                .item(tag_row(&project.tags, true)),
        )
}

fn project_link(label: &'static str, url: &'static str) -> impl Element {
    let hovered = Mutable::new(false);
    Link::new()
        .s(Font::new()
            .size(14)
            .color_signal(hovered.signal().map_bool(theme::accent, theme::muted_text)))
        .label(label)
        .to(url)
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
}

fn social_link(social: &'static SocialLink) -> impl Element {
    let hovered = Mutable::new(false);
    Link::new()
        .s(Font::new()
            .size(15)
            .weight(FontWeight::Medium)
            .color_signal(hovered.signal().map_bool(theme::accent, theme::muted_text)))
        .label(social.kind.label())
        .to(social.url.as_str())
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
}

fn mail_button(label: &'static str, mailto: String) -> impl Element {
    let hovered = Mutable::new(false);
    Link::new()
        .s(Align::new().center_x())
        .s(Padding::new().x(32).y(16))
        .s(RoundedCorners::all(8))
        .s(Font::new().size(18).weight(FontWeight::Bold).color(theme::surface()))
        .s(Background::new().color_signal(
            hovered.signal().map_bool(theme::accent_hover, theme::accent),
        ))
        .label(format!("✉ {label}"))
        .to(mailto)
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
}
