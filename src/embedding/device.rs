use candle_core::Device;
use tracing::{debug, warn};

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::info;

use super::error::EmbeddingError;

/// Backend names compiled into this build, in preference order.
pub fn compiled_backends() -> &'static [&'static str] {
    if cfg!(all(feature = "metal", feature = "cuda")) {
        &["metal", "cuda", "cpu"]
    } else if cfg!(feature = "metal") {
        &["metal", "cpu"]
    } else if cfg!(feature = "cuda") {
        &["cuda", "cpu"]
    } else {
        &["cpu"]
    }
}

/// Picks the first usable GPU backend enabled at compile time, otherwise the CPU.
///
/// Encoding two short texts per request is cheap on CPU, so a missing GPU only logs a warning.
pub fn select_device() -> Result<Device, EmbeddingError> {
    let mut failures: Vec<String> = Vec::new();

    for backend in compiled_backends() {
        match try_backend(backend) {
            Ok(Some(device)) => return Ok(device),
            Ok(None) => {}
            Err(e) => {
                warn!(backend = backend, error = %e, "GPU backend unavailable");
                failures.push(e.to_string());
            }
        }
    }

    if failures.is_empty() {
        debug!("No GPU backend compiled, using CPU");
    } else {
        warn!(reason = %failures.join("; "), "Falling back to CPU device");
    }
    Ok(Device::Cpu)
}

fn try_backend(backend: &str) -> Result<Option<Device>, EmbeddingError> {
    match backend {
        #[cfg(feature = "metal")]
        "metal" => {
            let device =
                Device::new_metal(0).map_err(|e| EmbeddingError::DeviceUnavailable {
                    device: "metal".to_string(),
                    reason: e.to_string(),
                })?;
            info!("Using Metal GPU acceleration");
            Ok(Some(device))
        }
        #[cfg(feature = "cuda")]
        "cuda" => {
            let device = Device::new_cuda(0).map_err(|e| EmbeddingError::DeviceUnavailable {
                device: "cuda".to_string(),
                reason: e.to_string(),
            })?;
            info!("Using CUDA GPU acceleration");
            Ok(Some(device))
        }
        _ => Ok(None),
    }
}
