//! Owns the audio device. The output stream's callback owns the [`Engine`]
//! outright: commands from the UI thread arrive over an mpsc channel and
//! are drained at the start of every buffer, so no locking is needed
//! anywhere on the audio path.

use cpal::{
    traits::{DeviceTrait, HostTrait, StreamTrait},
    Device, FromSample, OutputCallbackInfo, SizedSample,
};
use daub_synth::{Command, Engine};
use std::sync::mpsc::Receiver;

pub struct Player {
    device: Device,
}

impl Player {
    pub fn new() -> anyhow::Result<Self> {
        let host = cpal::default_host();
        log::info!("cpal host: {}", host.id().name());
        let device = host
            .default_output_device()
            .ok_or(anyhow::anyhow!("no output device"))?;
        if let Ok(name) = device.name() {
            log::info!("cpal device: {}", name);
        } else {
            log::info!("cpal device: (no name)");
        }
        Ok(Self { device })
    }

    /// Build, start and return the output stream. The caller must keep the
    /// returned stream alive for audio to flow.
    pub fn play(
        &self,
        commands: Receiver<Command>,
    ) -> anyhow::Result<cpal::Stream> {
        let config = self.device.default_output_config()?;
        log::info!("sample rate: {}", config.sample_rate().0);
        log::info!("num channels: {}", config.channels());
        use cpal::SampleFormat;
        match config.sample_format() {
            SampleFormat::I8 => self.make_stream::<i8>(&config.into(), commands),
            SampleFormat::I16 => self.make_stream::<i16>(&config.into(), commands),
            SampleFormat::I32 => self.make_stream::<i32>(&config.into(), commands),
            SampleFormat::I64 => self.make_stream::<i64>(&config.into(), commands),
            SampleFormat::U8 => self.make_stream::<u8>(&config.into(), commands),
            SampleFormat::U16 => self.make_stream::<u16>(&config.into(), commands),
            SampleFormat::U32 => self.make_stream::<u32>(&config.into(), commands),
            SampleFormat::U64 => self.make_stream::<u64>(&config.into(), commands),
            SampleFormat::F32 => self.make_stream::<f32>(&config.into(), commands),
            SampleFormat::F64 => self.make_stream::<f64>(&config.into(), commands),
            sample_format => Err(anyhow::anyhow!(
                "unsupported sample format {}",
                sample_format
            )),
        }
    }

    fn make_stream<T>(
        &self,
        config: &cpal::StreamConfig,
        commands: Receiver<Command>,
    ) -> anyhow::Result<cpal::Stream>
    where
        T: SizedSample + FromSample<f32>,
    {
        let channels = config.channels as usize;
        let mut engine = Engine::new(config.sample_rate.0 as f32);
        let mut mono_buf = Vec::new();
        let stream = self.device.build_output_stream(
            config,
            move |data: &mut [T], _: &OutputCallbackInfo| {
                while let Ok(command) = commands.try_recv() {
                    engine.handle(command);
                }
                mono_buf.resize(data.len() / channels, 0.0);
                engine.render(&mut mono_buf);
                for (frame, &sample) in
                    data.chunks_mut(channels).zip(mono_buf.iter())
                {
                    // runaway density can push the sends hot; keep the
                    // output inside the legal sample range
                    let sample = sample.clamp(-1.0, 1.0);
                    for element in frame.iter_mut() {
                        *element = T::from_sample(sample);
                    }
                }
            },
            |err| log::error!("stream error: {}", err),
            None,
        )?;
        stream.play()?;
        Ok(stream)
    }
}
