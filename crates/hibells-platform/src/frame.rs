//! Frame adapter — a sandboxed `<iframe>` laid over the egui canvas.
//!
//! egui cannot render HTML, so the portal panel only reserves a rectangle;
//! this element is positioned over it and shown while the Portal tab is
//! active. Load and error signals are forwarded to the event bus.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlIFrameElement};

use hibells_core::event_bus::EventBus;
use hibells_core::ports::{FrameBounds, FramePort, SandboxPolicy};
use hibells_types::{
    event::{AppEvent, FrameEvent},
    AppError, Result,
};

const FRAME_TITLE: &str = "Bells University Portal";

pub struct IframeHost {
    frame: HtmlIFrameElement,
    _onload: Closure<dyn FnMut(Event)>,
    _onerror: Closure<dyn FnMut(Event)>,
}

impl IframeHost {
    /// Create the (hidden) iframe and attach it to `<body>`
    pub fn new(event_bus: EventBus) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| AppError::Frame("No document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| AppError::Frame("No <body>".to_string()))?;

        let frame: HtmlIFrameElement = document
            .create_element("iframe")
            .map_err(|e| AppError::JsInterop(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|_| AppError::Frame("Element is not an iframe".to_string()))?;
        frame.set_title(FRAME_TITLE);

        let style = frame.style();
        for (name, value) in [
            ("position", "fixed"),
            ("border", "0"),
            ("background", "white"),
            ("z-index", "10"),
            ("display", "none"),
        ] {
            style
                .set_property(name, value)
                .map_err(|e| AppError::JsInterop(format!("{:?}", e)))?;
        }

        let bus = event_bus.clone();
        let onload = Closure::wrap(Box::new(move |_event: Event| {
            bus.emit(AppEvent::Frame(FrameEvent::Loaded));
        }) as Box<dyn FnMut(Event)>);
        frame.set_onload(Some(onload.as_ref().unchecked_ref()));

        let bus = event_bus;
        let onerror = Closure::wrap(Box::new(move |event: Event| {
            bus.emit(AppEvent::Frame(FrameEvent::Error {
                message: format!("{} event", event.type_()),
            }));
        }) as Box<dyn FnMut(Event)>);
        frame.set_onerror(Some(onerror.as_ref().unchecked_ref()));

        body.append_child(&frame)
            .map_err(|e| AppError::JsInterop(format!("{:?}", e)))?;

        Ok(Self {
            frame,
            _onload: onload,
            _onerror: onerror,
        })
    }
}

impl FramePort for IframeHost {
    fn load(&self, url: &str, sandbox: &SandboxPolicy) -> Result<()> {
        // sandbox must be in place before navigation starts
        self.frame
            .set_attribute("sandbox", &sandbox.attribute_value())
            .map_err(|e| AppError::Frame(format!("{:?}", e)))?;
        self.frame.set_src(url);
        Ok(())
    }

    fn set_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        let _ = self.frame.style().set_property("display", display);
    }

    fn set_bounds(&self, bounds: FrameBounds) {
        let style = self.frame.style();
        let _ = style.set_property("left", &format!("{}px", bounds.x));
        let _ = style.set_property("top", &format!("{}px", bounds.y));
        let _ = style.set_property("width", &format!("{}px", bounds.width));
        let _ = style.set_property("height", &format!("{}px", bounds.height));
    }
}

impl Drop for IframeHost {
    fn drop(&mut self) {
        self.frame.remove();
    }
}
