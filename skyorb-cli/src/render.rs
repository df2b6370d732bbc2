use skyorb_core::{CurrentWeatherClient, WeatherPresenter};

/// Print the view surfaces in display order: banner, text panel, map
/// viewport, sphere.
pub fn print_views<C: CurrentWeatherClient>(presenter: &mut WeatherPresenter<C>) {
    if let Some(message) = presenter.panel().banner() {
        println!("! {message}");
    }

    let panel = presenter.panel();
    println!("{}", panel.city());
    println!("{}", panel.temperature());
    println!("{}", panel.description());
    println!("{}", panel.humidity());
    println!("{}", panel.wind());

    let map = presenter.map();
    let center = map.center();
    println!(
        "Map: center ({:.2}, {:.2}) zoom {}, {} marker(s)",
        center.lat,
        center.lon,
        map.zoom(),
        map.markers().len()
    );

    // One rendered frame, so the printed scale sits somewhere on the
    // free-running pulse.
    let scale = presenter.scene_mut().advance_frame();
    let scene = presenter.scene();
    println!("Sphere: color #{:06X}, scale {:.3}", scene.color(), scale);
}
