//! End-to-end render pass tests against real files.

use std::fs;
use std::path::Path;

use hueweave::{
    render_templates, ColorRole, DescriptorList, NullSink, Palette, Preferences, RenderStatus,
    SkipReason, TemplateDescriptor, ThemeMode,
};
use tempfile::TempDir;

fn test_palette() -> Palette {
    Palette::from_hex_entries([
        (ColorRole::Primary, "#6750A4"),
        (ColorRole::Surface, "#1A1C1E"),
        (ColorRole::OnSurface, "#E3E2E6"),
    ])
    .unwrap()
}

fn descriptor_for(dir: &TempDir, name: &str, template: &str) -> TemplateDescriptor {
    let template_path = dir.path().join(format!("{name}.template"));
    fs::write(&template_path, template).unwrap();
    TemplateDescriptor::new(name, template_path, dir.path().join(format!("{name}.out")))
}

#[test]
fn end_to_end_dark_render() {
    let dir = TempDir::new().unwrap();
    let descriptor = descriptor_for(
        &dir,
        "colors-dark",
        "color: @{primary.hex}; bg: @{surface.rgba50}; wall: @{wallpaper}",
    );
    let output_path = descriptor.output_path.clone();
    let list = DescriptorList {
        descriptors: vec![descriptor],
    };

    let report = render_templates(
        &test_palette(),
        Path::new("/walls/forest.png"),
        ThemeMode::Dark,
        &list,
        &Preferences::new(),
        dir.path(),
        &NullSink,
    );

    assert_eq!(
        report.status_of("colors-dark"),
        Some(&RenderStatus::Rendered)
    );

    let rendered = fs::read_to_string(output_path).unwrap();
    assert!(rendered.contains("color: #6750A4;"), "got: {rendered}");
    assert!(rendered.contains("rgba(26,28,30,0.5)"), "got: {rendered}");
    assert!(rendered.contains("wall: /walls/forest.png"));
}

#[test]
fn rendering_twice_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let descriptor = descriptor_for(
        &dir,
        "kitty-dark",
        "fg @{onSurface}\nbg @{surface}\naccent @{primary.rgb}\nhue @{primary.hue}\n",
    );
    let output_path = descriptor.output_path.clone();
    let list = DescriptorList {
        descriptors: vec![descriptor],
    };

    let render = || {
        render_templates(
            &test_palette(),
            Path::new("/walls/forest.png"),
            ThemeMode::Dark,
            &list,
            &Preferences::new(),
            dir.path(),
            &NullSink,
        )
    };

    render();
    let first = fs::read(&output_path).unwrap();
    render();
    let second = fs::read(&output_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn dark_descriptor_is_skipped_in_light_mode() {
    let dir = TempDir::new().unwrap();
    let descriptor = descriptor_for(&dir, "spotify-dark", "accent @{primary}");
    let list = DescriptorList {
        descriptors: vec![descriptor],
    };
    // Spotify theming is enabled, so only the mode filter applies.
    let mut prefs = Preferences::new();
    prefs.set("THEME_SPOTIFY", true);

    let report = render_templates(
        &test_palette(),
        Path::new("/walls/forest.png"),
        ThemeMode::Light,
        &list,
        &prefs,
        dir.path(),
        &NullSink,
    );

    assert_eq!(
        report.status_of("spotify-dark"),
        Some(&RenderStatus::Skipped {
            reason: SkipReason::ModeMismatch
        })
    );
}

#[test]
fn feature_gate_toggles_rendering() {
    let dir = TempDir::new().unwrap();
    let descriptor = descriptor_for(&dir, "discord", "accent @{primary.hex}");
    let list = DescriptorList {
        descriptors: vec![descriptor],
    };

    let render = |prefs: &Preferences| {
        render_templates(
            &test_palette(),
            Path::new("/walls/forest.png"),
            ThemeMode::Light,
            &list,
            prefs,
            dir.path(),
            &NullSink,
        )
    };

    let disabled = render(&Preferences::new());
    assert_eq!(
        disabled.status_of("discord"),
        Some(&RenderStatus::Skipped {
            reason: SkipReason::FeatureDisabled
        })
    );

    let mut prefs = Preferences::new();
    prefs.set("THEME_DISCORD", true);
    let enabled = render(&prefs);
    assert_eq!(enabled.status_of("discord"), Some(&RenderStatus::Rendered));
}

#[test]
fn missing_template_skips_only_that_descriptor() {
    let dir = TempDir::new().unwrap();
    let good = descriptor_for(&dir, "gtk-dark", "bg @{surface.hex}");
    let missing = TemplateDescriptor::new(
        "broken-dark",
        dir.path().join("does-not-exist.template"),
        dir.path().join("broken.out"),
    );
    let list = DescriptorList {
        descriptors: vec![missing, good],
    };

    let report = render_templates(
        &test_palette(),
        Path::new("/walls/forest.png"),
        ThemeMode::Dark,
        &list,
        &Preferences::new(),
        dir.path(),
        &NullSink,
    );

    assert_eq!(
        report.status_of("broken-dark"),
        Some(&RenderStatus::Skipped {
            reason: SkipReason::MissingSource
        })
    );
    assert_eq!(report.status_of("gtk-dark"), Some(&RenderStatus::Rendered));
    assert_eq!(report.rendered_count(), 1);
}

#[test]
fn unwritable_output_is_reported_as_failed() {
    let dir = TempDir::new().unwrap();
    // A plain file where the output's parent directory should be.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "in the way").unwrap();

    let template_path = dir.path().join("t.template");
    fs::write(&template_path, "bg @{surface}").unwrap();
    let descriptor = TemplateDescriptor::new(
        "wedged-dark",
        template_path,
        blocker.join("nested").join("out.css"),
    );
    let list = DescriptorList {
        descriptors: vec![descriptor],
    };

    let report = render_templates(
        &test_palette(),
        Path::new("/walls/forest.png"),
        ThemeMode::Dark,
        &list,
        &Preferences::new(),
        dir.path(),
        &NullSink,
    );

    assert!(matches!(
        report.status_of("wedged-dark"),
        Some(RenderStatus::Failed { .. })
    ));
}

#[test]
fn pass_output_order_matches_declaration_order() {
    let dir = TempDir::new().unwrap();
    let list = DescriptorList {
        descriptors: vec![
            descriptor_for(&dir, "a-dark", "@{primary}"),
            descriptor_for(&dir, "b-light", "@{primary}"),
            descriptor_for(&dir, "c-dark", "@{primary}"),
        ],
    };

    let report = render_templates(
        &test_palette(),
        Path::new("/walls/forest.png"),
        ThemeMode::Dark,
        &list,
        &Preferences::new(),
        dir.path(),
        &NullSink,
    );

    let names: Vec<_> = report.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["a-dark", "b-light", "c-dark"]);
}

#[test]
fn descriptor_list_loads_from_json_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("gtk.template"), "bg @{surface.hex}").unwrap();
    let out = dir.path().join("gtk.out");

    let list_path = dir.path().join("templates.json");
    fs::write(
        &list_path,
        format!(
            r#"[{{"name": "gtk-dark", "templatePath": "gtk.template", "outputPath": "{}"}}]"#,
            out.display()
        ),
    )
    .unwrap();

    let list = DescriptorList::load(&list_path).unwrap();
    let report = render_templates(
        &test_palette(),
        Path::new("/walls/forest.png"),
        ThemeMode::Dark,
        &list,
        &Preferences::new(),
        dir.path(),
        &NullSink,
    );

    assert_eq!(report.rendered_count(), 1);
    assert_eq!(fs::read_to_string(out).unwrap(), "bg #1A1C1E");
}
