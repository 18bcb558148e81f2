use crate::types::PlannerRequest;

/// Build the instruction sent to the generation service.
pub fn generate_itinerary_prompt(request: &PlannerRequest) -> String {
    format!(
        "Agis comme un expert en voyage local. Crée un guide de voyage complet pour {destination}.
Durée : {days} jours.
Style : {style}.
Langue : français.

Le guide doit contenir :
1. Un itinéraire jour par jour détaillé, avec exactement {days} jours numérotés de 1 à {days}.
   Pour chaque jour, inclus obligatoirement une suggestion pour le déjeuner et une pour le dîner :
   - cite des plats typiques ou gastronomiques de la région ;
   - recommande un restaurant réel ou un endroit précis (quartier, type d'établissement) pour les déguster.
2. Une liste de 5 à 7 objets indispensables à mettre dans la valise pour cette destination précise.
3. Des conseils locaux (coutumes, pièges à éviter).
4. 9 recommandations d'hébergement réparties strictement en 3 catégories :
   - 3 options \"Luxe\" (haut de gamme, charme exceptionnel) ;
   - 3 options \"Confort\" (bon rapport qualité/prix, bien situé) ;
   - 3 options \"Budget\" (économique, auberge, capsule).
   Regroupe-les dans cet ordre : Luxe, puis Confort, puis Budget.
5. 4 sites historiques ou culturels incontournables avec le prix approximatif du billet (ou \"Gratuit\").
6. Des infos pratiques : devise, budget journalier estimé par personne, conseil météo et 3 à 5 spécialités culinaires locales.",
        destination = request.destination.trim(),
        days = request.days,
        style = request.style,
    )
}

/// Messages cycled while a generation request is outstanding.
pub const LOADING_TIPS: [&str; 5] = [
    "Recherche des meilleurs spots...",
    "Organisation de l'itinéraire...",
    "Vérification des disponibilités...",
    "Ajout d'une touche de magie...",
    "Finalisation de votre voyage de rêve...",
];

pub fn loading_tip(tick: usize) -> &'static str {
    LOADING_TIPS[tick % LOADING_TIPS.len()]
}
