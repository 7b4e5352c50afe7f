//! Selfie capture from the front camera into a file input.
//!
//! Exposed to page scripts as `new CameraCapture(videoId, canvasId, inputId)`
//! with a `capture()` method, and wired declaratively for
//! `[data-camera]` containers:
//!
//! ```html
//! <div data-camera data-video="v" data-canvas="c" data-input="selfie">
//!   <video id="v"></video> <canvas id="c"></canvas>
//!   <button type="button" data-capture>Capture</button>
//! </div>
//! ```

use std::rc::Rc;

use futures::channel::oneshot;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{
    Blob, CanvasRenderingContext2d, DataTransfer, Document, Element, Event, EventInit, File, FilePropertyBag,
    HtmlCanvasElement, HtmlInputElement, HtmlVideoElement, MediaStream, MediaStreamConstraints,
};

use super::dom;
use crate::logging;

const TAG: &str = "camera";
const JPEG_TYPE: &str = "image/jpeg";
const JPEG_QUALITY: f64 = 0.9;
const FILE_NAME: &str = "selfie.jpg";

pub fn init(document: &Document) -> Result<(), JsValue> {
    for container in dom::query_all::<Element>(document, "[data-camera]")? {
        let ids = (
            dom::data_attr(&container, "video"),
            dom::data_attr(&container, "canvas"),
            dom::data_attr(&container, "input"),
        );
        let (Some(video_id), Some(canvas_id), Some(input_id)) = ids else {
            logging::warn(TAG, "[data-camera] needs data-video, data-canvas and data-input");
            continue;
        };
        let Some(camera) = CameraCapture::from_ids(document, &video_id, &canvas_id, &input_id) else {
            continue;
        };
        camera.open_stream();

        let camera = Rc::new(camera);
        for button in dom::query_all_in::<Element>(&container, "[data-capture]")? {
            let camera = camera.clone();
            dom::on(&button, "click", move |_| camera.capture())?;
        }
    }
    Ok(())
}

#[wasm_bindgen]
pub struct CameraCapture {
    video: HtmlVideoElement,
    canvas: HtmlCanvasElement,
    input: Option<HtmlInputElement>,
}

#[wasm_bindgen]
impl CameraCapture {
    /// Resolve the elements by id and start the front camera.
    #[wasm_bindgen(constructor)]
    pub fn new(video_id: &str, canvas_id: &str, input_id: &str) -> Result<CameraCapture, JsValue> {
        let document = dom::window()
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let camera = Self::from_ids(&document, video_id, canvas_id, input_id)
            .ok_or_else(|| JsValue::from_str("camera video or canvas element not found"))?;
        camera.open_stream();
        Ok(camera)
    }

    /// Grab the current frame as `selfie.jpg` into the file input and fire `change`.
    pub fn capture(&self) {
        let Some(input) = self.input.clone() else {
            logging::error_msg(TAG, "no file input to receive the capture");
            return;
        };
        let video = self.video.clone();
        let canvas = self.canvas.clone();
        spawn_local(async move {
            if let Err(e) = snapshot(&video, &canvas, &input).await {
                logging::error(TAG, "capture failed", &e);
            }
        });
    }
}

impl CameraCapture {
    /// `None` unless both the video and canvas exist. The input is optional.
    fn from_ids(document: &Document, video_id: &str, canvas_id: &str, input_id: &str) -> Option<Self> {
        let video = document.get_element_by_id(video_id)?.dyn_into().ok()?;
        let canvas = document.get_element_by_id(canvas_id)?.dyn_into().ok()?;
        let input = document
            .get_element_by_id(input_id)
            .and_then(|el| el.dyn_into().ok());
        Some(Self { video, canvas, input })
    }

    fn open_stream(&self) {
        let video = self.video.clone();
        spawn_local(async move {
            if let Err(e) = attach_front_camera(&video).await {
                logging::error(TAG, "camera access denied", &e);
            }
        });
    }
}

async fn attach_front_camera(video: &HtmlVideoElement) -> Result<(), JsValue> {
    let devices = dom::window().navigator().media_devices()?;

    let video_constraints = Object::new();
    Reflect::set(&video_constraints, &"facingMode".into(), &"user".into())?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video_constraints);

    let stream: MediaStream = JsFuture::from(devices.get_user_media_with_constraints(&constraints)?)
        .await?
        .dyn_into()?;
    video.set_src_object(Some(&stream));
    JsFuture::from(video.play()?).await?;
    Ok(())
}

async fn snapshot(video: &HtmlVideoElement, canvas: &HtmlCanvasElement, input: &HtmlInputElement) -> Result<(), JsValue> {
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());
    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;
    context.draw_image_with_html_video_element(video, 0.0, 0.0)?;

    let blob = encode_jpeg(canvas).await?;
    let options = FilePropertyBag::new();
    options.set_type(JPEG_TYPE);
    let file = File::new_with_blob_sequence_and_options(&Array::of1(&blob), FILE_NAME, &options)?;

    let transfer = DataTransfer::new()?;
    transfer.items().add_with_file(&file)?;
    input.set_files(transfer.files().as_ref());

    let init = EventInit::new();
    init.set_bubbles(true);
    input.dispatch_event(&Event::new_with_event_init_dict("change", &init)?)?;
    Ok(())
}

/// `canvas.toBlob` as a future.
async fn encode_jpeg(canvas: &HtmlCanvasElement) -> Result<Blob, JsValue> {
    let (sender, receiver) = oneshot::channel::<Option<Blob>>();
    let callback = Closure::once(move |blob: JsValue| {
        let _ = sender.send(blob.dyn_into::<Blob>().ok());
    });
    canvas.to_blob_with_type_and_encoder_options(
        callback.as_ref().unchecked_ref(),
        JPEG_TYPE,
        &JsValue::from_f64(JPEG_QUALITY),
    )?;

    // `callback` must outlive the browser's call into it
    let blob = receiver
        .await
        .map_err(|_| JsValue::from_str("toBlob callback was dropped"))?;
    drop(callback);
    blob.ok_or_else(|| JsValue::from_str("canvas produced no image"))
}
