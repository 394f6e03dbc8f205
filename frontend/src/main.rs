use devport_core::content::NavEntry;
use devport_core::{ContentError, PageView, Portfolio, SectionId};
use std::rc::Rc;
use std::sync::OnceLock;
use zoon::{eprintln, *};

mod browser_host;
mod logger;
mod sections;
mod theme;

use browser_host::BrowserHost;

static PORTFOLIO_JSON: &str = include_str!("../../content/portfolio.json");

fn portfolio() -> Result<&'static Portfolio, &'static ContentError> {
    static PORTFOLIO: OnceLock<Result<Portfolio, ContentError>> = OnceLock::new();
    PORTFOLIO
        .get_or_init(|| Portfolio::from_json(PORTFOLIO_JSON))
        .as_ref()
}

fn main() {
    logger::init();
    start_app("app", root);
}

fn root() -> impl Element {
    match App::load() {
        Ok(app) => Either::Left(app.root()),
        Err(message) => {
            eprintln!("{message}");
            Either::Right(error_notice(message))
        }
    }
}

fn error_notice(message: String) -> impl Element {
    El::new()
        .s(Align::center())
        .s(Padding::all(24))
        .s(Font::new().color(color!("LightCoral")))
        .child(message)
}

#[derive(Clone)]
struct App {
    portfolio: &'static Portfolio,
    page: Rc<PageView<BrowserHost>>,
    compact: Mutable<bool>,
}

impl App {
    fn load() -> Result<Self, String> {
        let portfolio =
            portfolio().map_err(|error| format!("Failed to load portfolio content: {error}"))?;
        portfolio
            .ensure_sections(&sections::RENDERED)
            .map_err(|error| format!("Portfolio content does not fit the page: {error}"))?;
        let host = BrowserHost::new().ok_or("Browser window is not available")?;
        Ok(Self {
            portfolio,
            page: Rc::new(PageView::new(Rc::new(host), portfolio.tracker())),
            compact: Mutable::new(false),
        })
    }

    fn root(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Background::new().color(theme::page_background()))
            .s(Font::new()
                .color(theme::body_text())
                .family([FontFamily::new("Pretendard"), FontFamily::SansSerif]))
            .on_viewport_size_change({
                let compact = self.compact.clone();
                move |width, _| compact.set_neq(width < theme::COMPACT_BREAKPOINT_PX)
            })
            .after_insert({
                let page = self.page.clone();
                move |_| page.mount()
            })
            .after_remove({
                let page = self.page.clone();
                move |_| page.unmount()
            })
            .item(self.nav_bar())
            .item(self.home_section())
            .item(self.about_section())
            .item(self.experience_section())
            .item(self.projects_section())
            .item(self.contact_section())
            .item_signal(self.page.state().at_bottom().signal().map_bool(|| None, {
                let this = self.clone();
                move || Some(this.scroll_hint())
            }))
    }

    fn navigate_on_press(&self, target: &SectionId) -> impl FnMut() + 'static {
        let page = self.page.clone();
        let target = target.clone();
        move || {
            page.navigate(&target);
        }
    }

    fn nav_bar(&self) -> impl Element + use<> {
        let show_mobile_menu = map_ref! {
            let compact = self.compact.signal(),
            let menu_open = self.page.state().menu_open().signal() =>
            *compact && *menu_open
        };
        Column::new()
            .s(Width::fill())
            .s(Background::new().color(theme::nav_background()))
            .s(Borders::new().bottom(Border::new().color(theme::border()).width(1)))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("position", "fixed")
                    .style("top", "0")
                    .style("left", "0")
                    .style("z-index", "50")
                    .style("backdrop-filter", "blur(12px)")
            })
            .item(
                Row::new()
                    .s(Width::fill().max(1280))
                    .s(Height::exact(theme::NAV_HEIGHT_PX))
                    .s(Align::new().center_x())
                    .s(Padding::new().x(24))
                    .item(self.brand_button())
                    .item(
                        El::new()
                            .s(Align::new().right())
                            .child_signal(self.compact.signal().map({
                                let this = self.clone();
                                move |compact| {
                                    Some(if compact {
                                        Either::Left(this.menu_button())
                                    } else {
                                        Either::Right(this.desktop_links())
                                    })
                                }
                            })),
                    ),
            )
            .item_signal(show_mobile_menu.map_bool(
                {
                    let this = self.clone();
                    move || Some(this.mobile_links())
                },
                || None,
            ))
    }

    fn brand_button(&self) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        let first_section = self
            .portfolio
            .first_section()
            .cloned()
            .unwrap_or(devport_core::tracker::FALLBACK_SECTION);
        Button::new()
            .s(Font::new()
                .size(20)
                .weight(FontWeight::Bold)
                .family([FontFamily::new("JetBrains Mono"), FontFamily::Monospace])
                .no_wrap()
                .color_signal(hovered.signal().map_bool(theme::accent, theme::heading_text)))
            .label(self.portfolio.brand.as_str())
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .on_press(self.navigate_on_press(&first_section))
    }

    fn desktop_links(&self) -> impl Element + use<> {
        Row::new()
            .s(Gap::new().x(16))
            .items(
                self.portfolio
                    .navigation
                    .iter()
                    .map(|entry| self.nav_link(entry, false)),
            )
    }

    fn mobile_links(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Background::new().color(theme::surface()))
            .s(Borders::new().top(Border::new().color(theme::border()).width(1)))
            .s(Padding::new().x(8).top(8).bottom(12))
            .s(Gap::new().y(4))
            .s(Shadows::new([Shadow::new()
                .color(color!("rgba(15, 23, 42, 0.12)"))
                .y(10)
                .blur(15)
                .spread(-3)]))
            .items(
                self.portfolio
                    .navigation
                    .iter()
                    .map(|entry| self.nav_link(entry, true)),
            )
    }

    fn nav_link(&self, entry: &'static NavEntry, stacked: bool) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        let hovered_signal = hovered.signal().broadcast();
        let is_active_signal = self
            .page
            .state()
            .is_active_signal(entry.id.clone())
            .broadcast();
        Button::new()
            .s(Padding::new().x(12).y(8))
            .s(RoundedCorners::all(6))
            .s(Font::new()
                .size(14)
                .weight(FontWeight::Medium)
                .no_wrap()
                .color_signal(map_ref! {
                    let is_active = is_active_signal.signal(),
                    let hovered = hovered_signal.signal() =>
                    if *is_active || *hovered {
                        theme::accent()
                    } else {
                        theme::body_text()
                    }
                }))
            .s(Background::new().color_signal(map_ref! {
                let is_active = is_active_signal.signal(),
                let hovered = hovered_signal.signal() =>
                match (*is_active, *hovered) {
                    (true, _) => theme::accent_soft(),
                    (false, true) => theme::hover_surface(),
                    (false, false) => theme::transparent(),
                }
            }))
            .update_raw_el(move |raw_el| {
                if stacked {
                    raw_el.style("width", "100%").style("text-align", "left")
                } else {
                    raw_el
                }
            })
            .label(entry.label.as_str())
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .on_press(self.navigate_on_press(&entry.id))
    }

    fn menu_button(&self) -> impl Element + use<> {
        let menu_open = self.page.state().menu_open().clone();
        Button::new()
            .s(Padding::all(8))
            .s(RoundedCorners::all(6))
            .s(Font::new().size(22).color(theme::body_text()))
            .label(El::new().child_signal(menu_open.signal().map_bool(|| "✕", || "☰")))
            .on_press({
                let page = self.page.clone();
                move || page.toggle_menu()
            })
    }

    /// Hint pinned to the bottom of the viewport until the end of the page is reached.
    fn scroll_hint(&self) -> impl Element + use<> {
        let hovered = Mutable::new(false);
        Button::new()
            .s(Padding::new().x(16).y(8))
            .s(RoundedCorners::all(999))
            .s(Font::new().size(13).weight(FontWeight::Medium).color(theme::muted_text()))
            .s(Background::new().color_signal(
                hovered
                    .signal()
                    .map_bool(theme::hover_surface, theme::nav_background),
            ))
            .s(Borders::all(Border::new().color(theme::border()).width(1)))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("position", "fixed")
                    .style("bottom", "24px")
                    .style("left", "50%")
                    .style("transform", "translateX(-50%)")
                    .style("z-index", "40")
            })
            .label("Scroll ↓")
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .on_press({
                let page = self.page.clone();
                move || {
                    page.navigate_next();
                }
            })
    }
}
