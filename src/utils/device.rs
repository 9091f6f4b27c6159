use burn::backend::libtorch::LibTorchDevice;

/// Pick the accelerator when one is available, falling back to the CPU
pub fn select_device(force_cpu: bool) -> LibTorchDevice {
    if force_cpu {
        return LibTorchDevice::Cpu;
    }

    if tch::Cuda::is_available() {
        LibTorchDevice::Cuda(0)
    } else {
        LibTorchDevice::Cpu
    }
}

/// A short human-readable device name for startup logs
pub fn describe(device: &LibTorchDevice) -> String {
    match device {
        LibTorchDevice::Cpu => "cpu".to_string(),
        LibTorchDevice::Cuda(index) => format!("cuda:{index}"),
        other => format!("{other:?}").to_lowercase(),
    }
}
