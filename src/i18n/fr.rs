//! French translations / Traductions fran\u{00E7}aises

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Calculateur de co\u{00FB}ts cloud".into());
    t.insert("app.tagline".into(), "Estimez vos \u{00E9}conomies en passant \u{00E0} nos services cloud !".into());

    // Usage form
    t.insert("form.usage_heading".into(), "Votre utilisation cloud actuelle".into());
    t.insert("form.vms".into(), "Nombre de machines virtuelles".into());
    t.insert("form.storage_tb".into(), "Stockage (To)".into());
    t.insert("form.bandwidth_mbps".into(), "Bande passante (Mbps)".into());
    t.insert("form.current_cost".into(), "Co\u{00FB}t cloud mensuel actuel".into());
    t.insert("form.invalid_number".into(), "Veuillez saisir un nombre positif ou nul.".into());

    // Contact form
    t.insert("form.contact_heading".into(), "Vos coordonn\u{00E9}es".into());
    t.insert("form.company_name".into(), "Entreprise *".into());
    t.insert("form.contact_name".into(), "Nom du contact *".into());
    t.insert("form.job_title".into(), "Fonction *".into());
    t.insert("form.email".into(), "Adresse e-mail *".into());
    t.insert("form.phone".into(), "T\u{00E9}l\u{00E9}phone *".into());

    // Validation
    t.insert("validation.company_required".into(), "Le nom de l'entreprise est requis.".into());
    t.insert("validation.contact_required".into(), "Le nom du contact est requis.".into());
    t.insert("validation.job_title_required".into(), "La fonction est requise.".into());
    t.insert("validation.email_required".into(), "L'adresse e-mail est requise.".into());
    t.insert("validation.email_invalid".into(), "Veuillez saisir une adresse e-mail valide.".into());
    t.insert("validation.phone_required".into(), "Le num\u{00E9}ro de t\u{00E9}l\u{00E9}phone est requis.".into());
    t.insert("validation.storage_invalid".into(), "Le stockage doit \u{00EA}tre positif ou nul.".into());
    t.insert("validation.bandwidth_invalid".into(), "La bande passante doit \u{00EA}tre positive ou nulle.".into());
    t.insert("validation.current_cost_invalid".into(), "Le co\u{00FB}t mensuel actuel doit \u{00EA}tre positif ou nul.".into());

    // Results
    t.insert("result.heading".into(), "Vos \u{00E9}conomies estim\u{00E9}es".into());
    t.insert("result.estimated_cost".into(), "Co\u{00FB}t mensuel estim\u{00E9}".into());
    t.insert("result.monthly_savings".into(), "\u{00C9}conomies mensuelles".into());
    t.insert("result.percentage_savings".into(), "\u{00C9}conomies en pourcentage".into());
    t.insert("result.monthly_increase".into(), "Augmentation mensuelle".into());
    t.insert("result.percentage_increase".into(), "Augmentation en pourcentage".into());

    // Rates
    t.insert("rates.heading".into(), "Tarifs appliqu\u{00E9}s".into());
    t.insert("rates.vm".into(), "Par machine virtuelle / mois".into());
    t.insert("rates.storage".into(), "Par To de stockage / mois".into());
    t.insert("rates.bandwidth".into(), "Par Mbps de bande passante / mois".into());
    t.insert("rates.from_sheet".into(), "grille tarifaire".into());
    t.insert("rates.default".into(), "par d\u{00E9}faut".into());

    // Quote document
    t.insert("pdf.title".into(), "Devis de co\u{00FB}ts cloud".into());
    t.insert("pdf.client_info".into(), "Informations client :".into());
    t.insert("pdf.company".into(), "Entreprise".into());
    t.insert("pdf.contact".into(), "Contact".into());
    t.insert("pdf.email".into(), "E-mail".into());
    t.insert("pdf.phone".into(), "T\u{00E9}l\u{00E9}phone".into());
    t.insert("pdf.current_costs".into(), "Co\u{00FB}ts cloud actuels :".into());
    t.insert("pdf.monthly_cost".into(), "Co\u{00FB}t mensuel".into());
    t.insert("pdf.estimated_costs".into(), "Co\u{00FB}ts estim\u{00E9}s :".into());
    t.insert("pdf.virtual_machines".into(), "Machines virtuelles".into());
    t.insert("pdf.storage".into(), "Stockage".into());
    t.insert("pdf.bandwidth".into(), "Bande passante".into());
    t.insert("pdf.total_estimate".into(), "Co\u{00FB}t total estim\u{00E9}".into());
    t.insert("pdf.potential_savings".into(), "\u{00C9}conomies potentielles :".into());
    t.insert("pdf.next_steps".into(), "Prochaines \u{00E9}tapes :".into());
    t.insert("pdf.follow_up".into(), "Notre \u{00E9}quipe commerciale vous contactera sous 24 heures.".into());
    t.insert("pdf.address".into(), "Adresse".into());
    t.insert("pdf.website".into(), "Site web".into());

    // Submission status
    t.insert("status.pdf_saved".into(), "Devis enregistr\u{00E9} dans".into());
    t.insert("status.email_sent".into(), "Devis g\u{00E9}n\u{00E9}r\u{00E9} et envoy\u{00E9} \u{00E0} notre \u{00E9}quipe commerciale ! Nous vous contacterons sous 24 heures.".into());
    t.insert("status.email_failed".into(), "Devis g\u{00E9}n\u{00E9}r\u{00E9} ! Notre \u{00E9}quipe commerciale vous contactera prochainement \u{00E0} :".into());
    t.insert("status.email_disabled".into(), "Devis g\u{00E9}n\u{00E9}r\u{00E9} ! Conservez le PDF pour vos dossiers.".into());

    t
}
