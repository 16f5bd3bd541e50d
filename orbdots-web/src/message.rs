/// Worker message decoding
use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::OffscreenCanvas;

/// The three message kinds the controller sends into the worker.
///
/// Decoded with `Reflect` field reads rather than JSON: the INIT payload
/// carries a transferred `OffscreenCanvas` handle, which cannot pass
/// through a string round-trip.
#[derive(Debug)]
pub enum WorkerMessage {
    /// Bind a scene to the transferred canvas. Does not start the loop.
    Init {
        canvas: OffscreenCanvas,
        render_object_count: usize,
    },
    /// Populate the scene and begin the frame loop.
    Start,
    /// Propagate a viewport resize.
    Resize {
        inner_height: f64,
        inner_width: f64,
        device_pixel_ratio: f64,
    },
}

impl WorkerMessage {
    /// Decode the `data` payload of a `MessageEvent`.
    pub fn from_event_data(data: &JsValue) -> Result<Self, JsValue> {
        let kind = Reflect::get(data, &"type".into())?
            .as_string()
            .ok_or_else(|| JsValue::from_str("message has no string `type` field"))?;

        match kind.as_str() {
            "INIT" => {
                let canvas = Reflect::get(data, &"canvas".into())?
                    .dyn_into::<OffscreenCanvas>()
                    .map_err(|_| JsValue::from_str("INIT `canvas` is not an OffscreenCanvas"))?;
                let render_object_count = Reflect::get(data, &"renderObjectCount".into())?
                    .as_f64()
                    .ok_or_else(|| JsValue::from_str("INIT has no numeric `renderObjectCount`"))?
                    as usize;
                Ok(Self::Init {
                    canvas,
                    render_object_count,
                })
            }
            "START" => Ok(Self::Start),
            "RESIZE" => {
                let inner_height = number_field(data, "innerHeight")?;
                let inner_width = number_field(data, "innerWidth")?;
                let device_pixel_ratio = number_field(data, "devicePixelRatio")?;
                Ok(Self::Resize {
                    inner_height,
                    inner_width,
                    device_pixel_ratio,
                })
            }
            other => Err(JsValue::from_str(&format!("unknown message type `{}`", other))),
        }
    }
}

fn number_field(data: &JsValue, name: &str) -> Result<f64, JsValue> {
    Reflect::get(data, &name.into())?
        .as_f64()
        .ok_or_else(|| JsValue::from_str(&format!("message has no numeric `{}` field", name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::Object;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn message(fields: &[(&str, JsValue)]) -> JsValue {
        let obj = Object::new();
        for (name, value) in fields {
            Reflect::set(&obj, &(*name).into(), value).unwrap();
        }
        obj.into()
    }

    #[wasm_bindgen_test]
    fn decodes_start() {
        let data = message(&[("type", "START".into())]);
        assert!(matches!(
            WorkerMessage::from_event_data(&data),
            Ok(WorkerMessage::Start)
        ));
    }

    #[wasm_bindgen_test]
    fn decodes_resize_fields() {
        let data = message(&[
            ("type", "RESIZE".into()),
            ("innerHeight", 300.0.into()),
            ("innerWidth", 400.0.into()),
            ("devicePixelRatio", 2.0.into()),
        ]);
        match WorkerMessage::from_event_data(&data) {
            Ok(WorkerMessage::Resize {
                inner_height,
                inner_width,
                device_pixel_ratio,
            }) => {
                assert_eq!(inner_height, 300.0);
                assert_eq!(inner_width, 400.0);
                assert_eq!(device_pixel_ratio, 2.0);
            }
            other => panic!("unexpected decode result: {:?}", other),
        }
    }

    #[wasm_bindgen_test]
    fn rejects_unknown_type() {
        let data = message(&[("type", "NOPE".into())]);
        assert!(WorkerMessage::from_event_data(&data).is_err());
    }

    #[wasm_bindgen_test]
    fn rejects_missing_resize_field() {
        let data = message(&[("type", "RESIZE".into()), ("innerHeight", 300.0.into())]);
        assert!(WorkerMessage::from_event_data(&data).is_err());
    }
}
