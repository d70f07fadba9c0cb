use super::*;

#[test]
fn nav_links_for_regular_users_offer_upgrade() {
    let links = nav_links(false);
    assert_eq!(
        links,
        vec![
            ("/dashboard/home", "Todos los Negocios"),
            ("/dashboard/offers", "Todas las Ofertas"),
            ("/dashboard/become-business", "Conviértete en Negocio"),
        ]
    );
}

#[test]
fn nav_links_for_owners_show_management_routes() {
    let links = nav_links(true);
    assert!(links.contains(&("/dashboard/my-offers", "Mis Ofertas")));
    assert!(links.contains(&("/dashboard/profile", "Mi Negocio")));
    assert!(!links.iter().any(|(href, _)| *href == "/dashboard/become-business"));
}
