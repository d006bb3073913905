use console::Style;
use vardenoise_core::pipeline::config::DenoiseConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_run_summary(config: &DenoiseConfig) {
    let s = Styles::new();
    let p = &config.params;

    println!();
    println!("  {}", s.title.apply_to("Variance-guided denoise"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(23)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Image"),
        s.path.apply_to(config.image.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Variance"),
        s.path.apply_to(config.variance.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!();

    println!(
        "  {:<14}{} ({} offsets)",
        s.label.apply_to("Search radius"),
        s.value.apply_to(p.search_radius),
        p.window_size()
    );
    println!(
        "  {:<14}{} (box radius {})",
        s.label.apply_to("Patch"),
        s.value.apply_to(p.patch_half_size),
        p.patch_radius()
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Epsilon"),
        s.value.apply_to(p.epsilon)
    );
    println!("  {:<14}{}", s.label.apply_to("k"), s.value.apply_to(p.k));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threads"),
        s.method.apply_to(if p.parallel { "Rayon" } else { "single" })
    );
    println!();
}
