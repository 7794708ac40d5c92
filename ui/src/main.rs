#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use points_admin_business::BusinessConfig;
use points_admin_ui::state::State;
use points_admin_ui::utils::fonts::add_font;

#[cfg(not(target_arch = "wasm32"))]
mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn load_config() -> BusinessConfig {
    BusinessConfig::from_env().unwrap_or_else(|err| {
        log::error!("{err}; falling back to default configuration");
        BusinessConfig::default()
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use points_admin_ui::utils::fonts::CJK_FONT_PATH;

    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    // Requests are spawned onto this runtime from the UI thread.
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("failed to start async runtime: {err}");
            return Ok(());
        }
    };
    let _guard = runtime.enter();

    let config = load_config();
    log::info!("points backend at {}", config.api_url());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    let font = match std::fs::read(CJK_FONT_PATH) {
        Ok(data) => Some(data),
        Err(err) => {
            log::warn!("CJK font not loaded from {CJK_FONT_PATH}: {err}");
            None
        }
    };

    eframe::run_native(
        "Points Admin",
        native_options,
        Box::new(move |cc| {
            if let Some(data) = font {
                add_font(&cc.egui_ctx, data);
            }

            let app = points_admin_ui::PointsAdminApp::new(State::new(&config));
            Ok(Box::new(app))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
async fn fetch_font(url: &str) -> Result<Vec<u8>, wasm_bindgen::JsValue> {
    use eframe::wasm_bindgen::JsCast as _;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::js_sys::{ArrayBuffer, Uint8Array};
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "font/ttf")?;

    let window = web_sys::window().ok_or("no window")?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let buffer: ArrayBuffer = JsFuture::from(resp.array_buffer()?).await?.dyn_into()?;

    Ok(Uint8Array::new(&buffer).to_vec())
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;
    use points_admin_ui::utils::fonts::CJK_FONT_URL;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|window| window.document()) else {
            log::error!("no document to mount into");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("egui_canvas")
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("egui_canvas is missing or not a canvas");
            return;
        };

        let font = match fetch_font(CJK_FONT_URL).await {
            Ok(data) => Some(data),
            Err(err) => {
                log::warn!("CJK font not loaded from {CJK_FONT_URL}: {err:?}");
                None
            }
        };

        let config = load_config();

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    if let Some(data) = font {
                        add_font(&cc.egui_ctx, data);
                    }

                    let app = points_admin_ui::PointsAdminApp::new(State::new(&config));
                    Ok(Box::new(app))
                }),
            )
            .await;

        // Remove the loading text and spinner:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(()) => loading_text.remove(),
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p> The app has crashed. See the developer console for details. </p>",
                    );
                    log::error!("failed to start eframe: {e:?}");
                }
            }
        }
    });
}
