//! Demo pages carrying the markup hooks the enhancement bundle looks for.

use leptos::prelude::*;

use super::config::ServerConfig;
use crate::components::{CopyButton, FlashAlert, PhotoCard, Section};
use crate::config::{CONFIG_ELEMENT_ID, PageConfig};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const BOOTSTRAP_ICONS: &str = "https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css";
const BOOTSTRAP_JS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js";
const BOOT_SCRIPT: &str = "import init from '/pkg/pm-web.js'; init({ module_or_path: '/pkg/pm-web_bg.wasm' });";

/// A generated gallery photo.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoPhoto {
    pub title: String,
    pub thumbnail: String,
    pub full_size: String,
    pub price: String,
}

impl DemoPhoto {
    fn new(id: u32) -> Self {
        // Reduce first so large ids cannot overflow
        let hue = (id % 360) * 47 % 360;
        Self {
            title: format!("Фото #{}", id),
            thumbnail: placeholder_image(id, hue, 400, 300),
            full_size: placeholder_image(id, hue, 1600, 1200),
            price: format!("{} \u{20BD}", 150 + (id % 350) * 37 % 350),
        }
    }
}

/// Photos on gallery `page` (1-based). Empty past the last page.
pub fn page_photos(config: &ServerConfig, page: u32) -> Vec<DemoPhoto> {
    if page == 0 || page > config.gallery_pages {
        return Vec::new();
    }
    let Some(first) = (page - 1)
        .checked_mul(config.photos_per_page)
        .and_then(|offset| offset.checked_add(1))
    else {
        return Vec::new();
    };
    (first..first.saturating_add(config.photos_per_page))
        .map(DemoPhoto::new)
        .collect()
}

/// Full gallery page. Infinite scroll counts from page 1, so that is what it shows.
pub fn gallery_page(config: &ServerConfig) -> String {
    let cards = photo_cards(page_photos(config, 1));
    document("PhotoMarket \u{2014} галерея", None, move || {
        view! {
            <FlashAlert kind="success">"Добро пожаловать в PhotoMarket!"</FlashAlert>
            <FlashAlert kind="info" permanent=true>
                "Фото показаны с водяными знаками. Оригинал доступен после оплаты."
            </FlashAlert>

            <h1 class="h3 mb-4">
                "Галерея события "
                <span class="badge bg-secondary" data-bs-toggle="tooltip" title="Фотографии загружены фотографом">
                    "?"
                </span>
            </h1>

            <Section id="order" title="Оформление заказа">
                <form class="needs-validation row g-3" novalidate="" method="get" action="/">
                    <div class="col-md-4">
                        <label for="price" class="form-label">"Цена, \u{20BD}"</label>
                        <input id="price" name="price" class="form-control" data-type="price" required="" />
                        <div class="invalid-feedback">"Укажите цену"</div>
                    </div>
                    <div class="col-md-4">
                        <label for="phone" class="form-label">"Телефон"</label>
                        <input
                            id="phone"
                            name="phone"
                            type="tel"
                            class="form-control"
                            placeholder="+7 (___) ___-__-__"
                            required=""
                        />
                        <div class="invalid-feedback">"Укажите телефон"</div>
                    </div>
                    <div class="col-md-4">
                        <label for="bank_card" class="form-label">"Карта для выплат"</label>
                        <input id="bank_card" name="bank_card" class="form-control" inputmode="numeric" />
                    </div>
                    <div class="col-12 d-flex gap-2">
                        <button type="submit" class="btn btn-primary" data-loading-text="Отправка...">
                            "Оплатить"
                        </button>
                        <button
                            type="button"
                            class="btn btn-outline-secondary"
                            data-bs-toggle="popover"
                            data-bs-title="Оплата"
                            data-bs-content="После оплаты оригинал фото придёт на почту."
                        >
                            "Как это работает?"
                        </button>
                    </div>
                </form>
            </Section>

            <Section id="share" title="Поделиться">
                <div class="d-flex gap-2 align-items-center">
                    <CopyButton text="PM-2024-0042" label="Код заказа" />
                    <a href="/selfie/" class="btn btn-link" data-confirm="Перейти к загрузке селфи?">
                        "Найти себя на фото"
                    </a>
                </div>
            </Section>

            <Section id="photos" title="Фотографии">
                <div class="row g-3" data-infinite-scroll="">{cards}</div>
            </Section>
        }
        .into_any()
    })
}

/// Photo cards for `page` without the document around them; blank past the last page.
pub fn gallery_fragment(config: &ServerConfig, page: u32) -> String {
    let photos = page_photos(config, page);
    if photos.is_empty() {
        return String::new();
    }
    render(move || photo_cards(photos))
}

/// Selfie upload page: status widget, front camera and file input with preview.
pub fn selfie_page() -> String {
    let page_config = PageConfig {
        status_poll_ms: 2_000,
        ..PageConfig::default()
    };
    document("PhotoMarket \u{2014} селфи", Some(page_config), || {
        view! {
            <h1 class="h3 mb-4">"Найдите себя на фотографиях"</h1>
            <p id="selfie-status" class="text-warning">
                <i class="bi bi-hourglass text-warning"></i>
                " Загрузите селфи, чтобы начать поиск"
            </p>

            <div class="row g-4">
                <div
                    class="col-md-6"
                    data-camera=""
                    data-video="selfie-video"
                    data-canvas="selfie-canvas"
                    data-input="selfie-input"
                >
                    <video id="selfie-video" class="w-100 rounded bg-dark" autoplay="" playsinline="" muted=""></video>
                    <canvas id="selfie-canvas" class="d-none"></canvas>
                    <button type="button" class="btn btn-primary mt-2" data-capture="">
                        <i class="bi bi-camera"></i>
                        " Сделать снимок"
                    </button>
                </div>
                <div class="col-md-6">
                    <form method="get" action="/selfie/">
                        <input
                            type="file"
                            id="selfie-input"
                            name="selfie"
                            accept="image/*"
                            class="form-control"
                            data-preview="#selfie-preview"
                        />
                    </form>
                    <img id="selfie-preview" class="img-thumbnail mt-2" alt="" />
                    <div>
                        <a href="/" class="btn btn-link" data-confirm="Вернуться в галерею?">"К галерее"</a>
                    </div>
                </div>
            </div>
        }
        .into_any()
    })
}

fn photo_cards(photos: Vec<DemoPhoto>) -> AnyView {
    photos
        .into_iter()
        .map(|photo| {
            view! {
                <PhotoCard
                    title=photo.title
                    thumbnail=photo.thumbnail
                    full_size=photo.full_size
                    price=photo.price
                />
            }
        })
        .collect_view()
        .into_any()
}

fn document(title: &'static str, page_config: Option<PageConfig>, content: impl FnOnce() -> AnyView + 'static) -> String {
    // Escape "</" so the JSON cannot close its script element early
    let config_json = page_config
        .and_then(|config| serde_json::to_string(&config).ok())
        .map(|json| json.replace("</", r"<\/"));

    render(move || {
        view! {
            <!DOCTYPE html>
            <html lang="ru">
                <head>
                    <meta charset="utf-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <title>{title}</title>
                    <link rel="stylesheet" href=BOOTSTRAP_CSS />
                    <link rel="stylesheet" href=BOOTSTRAP_ICONS />
                </head>
                <body>
                    <main class="container py-4">{content()}</main>
                    {config_json.map(|json| view! {
                        <script type="application/json" id=CONFIG_ELEMENT_ID inner_html=json></script>
                    })}
                    <script src=BOOTSTRAP_JS></script>
                    <script type="module" inner_html=BOOT_SCRIPT></script>
                </body>
            </html>
        }
    })
}

fn render<V: IntoView>(view: impl FnOnce() -> V) -> String {
    Owner::new().with(|| view().to_html())
}

fn placeholder_image(id: u32, hue: u32, width: u32, height: u32) -> String {
    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'%3E\
         %3Crect width='100%25' height='100%25' fill='hsl({hue},45%25,55%25)'/%3E\
         %3Ctext x='50%25' y='50%25' dominant-baseline='middle' text-anchor='middle' \
         font-family='sans-serif' font-size='{size}' fill='white'%3E%23{id}%3C/text%3E%3C/svg%3E",
        w = width,
        h = height,
        hue = hue,
        size = height / 6,
        id = id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ServerConfig {
        ServerConfig {
            gallery_pages: 2,
            photos_per_page: 4,
            selfie_pending_polls: 1,
        }
    }

    #[test]
    fn test_pages_are_contiguous() {
        let first = page_photos(&config(), 1);
        let second = page_photos(&config(), 2);
        assert_eq!(first.len(), 4);
        assert_eq!(first[0].title, "Фото #1");
        assert_eq!(second[0].title, "Фото #5");
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        assert!(page_photos(&config(), 0).is_empty());
        assert!(page_photos(&config(), 3).is_empty());
        assert_eq!(gallery_fragment(&config(), 3), "");
    }

    #[test]
    fn test_last_pages_of_a_huge_gallery_do_not_overflow() {
        let config = ServerConfig {
            gallery_pages: u32::MAX,
            photos_per_page: 2,
            selfie_pending_polls: 1,
        };
        assert!(page_photos(&config, u32::MAX).is_empty());
        let photos = page_photos(&config, u32::MAX / 2);
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].title, format!("Фото #{}", u32::MAX - 2));
        assert_eq!(photos[1].title, format!("Фото #{}", u32::MAX - 1));
    }

    #[test]
    fn test_placeholder_is_a_data_url() {
        let url = placeholder_image(7, 120, 400, 300);
        assert!(url.starts_with("data:image/svg+xml,"));
        assert!(url.contains("%237"));
        assert!(!url.contains('#'));
    }
}
