use conv_core::{PIPELINE_LATENCY, PIXEL_MAX};
use conv_host::{
    reference_stream, simulate, EnablePattern, HostError, KernelMode, LineBuffer, Stimulus,
};

const ROW_WIDTH: usize = 16;
const M: u16 = PIXEL_MAX;

// capturile de referinta incep cu patru esantioane inaintea celui de-al doilea rand de stimul
const CAPTURE_START: usize = 3 * ROW_WIDTH - 4;
const CAPTURE_LEN: usize = 20;

// doua randuri de zero, randurile cu patch-uri (restul randului zero), doua randuri de zero
fn patch_frame(patches: &[[u16; 3]]) -> Vec<u16> {
    let mut samples = vec![0; 2 * ROW_WIDTH];
    for patch in patches {
        let mut row = vec![0; ROW_WIDTH];
        row[..3].copy_from_slice(patch);
        samples.extend(row);
    }
    samples.extend(vec![0; 2 * ROW_WIDTH]);
    samples
}

fn run(
    samples: &[u16],
    mode: KernelMode,
    convolution: bool,
    pattern: EnablePattern,
) -> Result<Vec<u16>, HostError> {
    let mut history = LineBuffer::new(ROW_WIDTH)?;
    let stimulus = Stimulus::build(samples, &mut history, pattern, mode, convolution)?;
    Ok(simulate(stimulus.into_steps(), 1)?.valid_outputs())
}

fn capture(outputs: &[u16]) -> &[u16] {
    &outputs[CAPTURE_START..CAPTURE_START + CAPTURE_LEN]
}

fn lit(window: &[u16]) -> Vec<usize> {
    window
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn vertical_edge_with_column_gradient() -> Result<(), HostError> {
    let samples = patch_frame(&[[0, M, M], [0, M, M], [0, M, M]]);
    let outputs = run(&samples, KernelMode::ColumnGradient, true, EnablePattern::Continuous)?;

    assert_eq!(outputs, reference_stream(&samples, ROW_WIDTH, KernelMode::ColumnGradient, true));

    let window = capture(&outputs);
    assert_eq!(lit(window), vec![5, 6, 7, 8]);
    assert!(window[5..=8].iter().all(|&v| v == M));
    Ok(())
}

#[test]
fn horizontal_edge_with_row_gradient() -> Result<(), HostError> {
    let samples = patch_frame(&[[0, 0, 0], [M, M, M], [M, M, M]]);
    let outputs = run(&samples, KernelMode::RowGradient, true, EnablePattern::Continuous)?;

    assert_eq!(outputs, reference_stream(&samples, ROW_WIDTH, KernelMode::RowGradient, true));

    let window = capture(&outputs);
    assert_eq!(lit(window), vec![4, 5, 6, 7, 8]);
    assert!(window[4..=8].iter().all(|&v| v == M));
    Ok(())
}

#[test]
fn horizontal_edge_with_column_gradient_cancels_at_center() -> Result<(), HostError> {
    let samples = patch_frame(&[[0, 0, 0], [M, M, M], [M, M, M]]);
    let outputs = run(&samples, KernelMode::ColumnGradient, true, EnablePattern::Continuous)?;

    assert_eq!(outputs, reference_stream(&samples, ROW_WIDTH, KernelMode::ColumnGradient, true));

    let window = capture(&outputs);
    assert_eq!(lit(window), vec![4, 5, 7, 8]);
    assert_eq!(window[6], 0);
    assert!([4, 5, 7, 8].iter().all(|&i| window[i] == M));
    Ok(())
}

#[test]
fn every_accepted_sample_appears_after_fixed_latency() -> Result<(), HostError> {
    let samples: Vec<u16> = (0..3 * ROW_WIDTH).map(|i| (i * 97 % 4096) as u16).collect();

    for pattern in [EnablePattern::Continuous, EnablePattern::Bubbles { period: 3 }] {
        let mut history = LineBuffer::new(ROW_WIDTH)?;
        let stimulus =
            Stimulus::build(&samples, &mut history, pattern, KernelMode::RowGradient, true)?;
        let trace = simulate(stimulus.into_steps(), 1)?;

        let accepted = trace.accepted_ticks();
        let valid = trace.valid_ticks();
        assert_eq!(accepted.len(), samples.len());
        assert_eq!(valid.len(), samples.len());
        for (a, v) in accepted.iter().zip(valid.iter()) {
            assert_eq!(v - a, PIPELINE_LATENCY);
        }
    }
    Ok(())
}

#[test]
fn bubbles_do_not_change_results() -> Result<(), HostError> {
    let samples = patch_frame(&[[0, M, M], [100, 2000, 300], [M, 0, M]]);

    let straight = run(&samples, KernelMode::ColumnGradient, true, EnablePattern::Continuous)?;
    for period in [1, 2, 5, 7] {
        let gapped = run(
            &samples,
            KernelMode::ColumnGradient,
            true,
            EnablePattern::Bubbles { period },
        )?;
        assert_eq!(straight, gapped, "bubble period {period}");
    }
    Ok(())
}

#[test]
fn passthrough_returns_window_center_for_any_mode() -> Result<(), HostError> {
    let samples: Vec<u16> = (0..4 * ROW_WIDTH).map(|i| (i * 131 % 4096) as u16).collect();

    for mode in [KernelMode::RowGradient, KernelMode::ColumnGradient] {
        let outputs = run(&samples, mode, false, EnablePattern::Continuous)?;
        assert_eq!(outputs.len(), samples.len());
        // centrul ferestrei pentru esantionul n este esantionul n - latime - 1
        for (n, &out) in outputs.iter().enumerate() {
            let center = n.checked_sub(ROW_WIDTH + 1).map_or(0, |i| samples[i]);
            assert_eq!(out, center, "sample {n}");
        }
    }
    Ok(())
}

// zgomot pseudo-aleator pe 12 biti
fn noise(seed: u32, len: usize) -> Vec<u16> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            ((state >> 16) % 4096) as u16
        })
        .collect()
}

#[test]
fn convolution_output_never_exceeds_pixel_range() -> Result<(), HostError> {
    // valori mari ca sa atingem saturatia
    let samples = noise(0x1234_5678, 4 * ROW_WIDTH);

    for mode in [KernelMode::RowGradient, KernelMode::ColumnGradient] {
        let outputs = run(&samples, mode, true, EnablePattern::Continuous)?;
        let expected = reference_stream(&samples, ROW_WIDTH, mode, true);
        assert_eq!(outputs, expected);
        assert!(outputs.iter().all(|&v| v <= M));
        assert!(outputs.iter().any(|&v| v == M));
    }
    Ok(())
}

#[test]
fn reset_holds_output_invalid_then_zero() -> Result<(), HostError> {
    let mut history = LineBuffer::new(ROW_WIDTH)?;
    let stimulus = Stimulus::build(
        &[0, 0, 0],
        &mut history,
        EnablePattern::Continuous,
        KernelMode::ColumnGradient,
        true,
    )?;
    let trace = simulate(stimulus.into_steps(), 4)?;

    let in_reset: Vec<_> = trace.records.iter().filter(|r| r.in_reset).collect();
    assert!(!in_reset.is_empty());
    assert!(in_reset.iter().all(|r| !r.output.valid));

    let first_valid = trace.valid_ticks()[0];
    let first_accepted = trace.accepted_ticks()[0];
    assert_eq!(first_valid - first_accepted, PIPELINE_LATENCY);
    assert_eq!(trace.valid_outputs(), vec![0, 0, 0]);
    Ok(())
}

#[test]
fn reset_mid_stream_starts_a_fresh_frame() -> Result<(), HostError> {
    let first = noise(0xdead_beef, 3 * ROW_WIDTH);
    let second = noise(0x0bad_cafe, 3 * ROW_WIDTH);
    let mode = KernelMode::ColumnGradient;

    let mut history = LineBuffer::new(ROW_WIDTH)?;
    let mut stimulus = Stimulus::new(EnablePattern::Continuous, mode, true)?;
    stimulus.push_samples(&first, &mut history)?;
    // fara golire: ultimele esantioane din primul cadru sunt inca in pipeline
    stimulus.push_reset(&mut history, 2);
    stimulus.push_samples(&second, &mut history)?;
    stimulus.drain();

    let trace = simulate(stimulus.into_steps(), 1)?;
    assert!(trace
        .records
        .iter()
        .filter(|r| r.in_reset)
        .all(|r| !r.output.valid && conv_core::from_pixel(r.output.sample) == 0));

    // esantioanele aflate in zbor la reset se pierd; al doilea cadru nu vede nimic din primul
    let mut expected = reference_stream(&first, ROW_WIDTH, mode, true);
    expected.truncate(first.len() - PIPELINE_LATENCY);
    expected.extend(reference_stream(&second, ROW_WIDTH, mode, true));
    assert_eq!(trace.valid_outputs(), expected);
    Ok(())
}
