use super::model;
use contracts::domain::a004_product::{Product, ProductDto};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Цвета вводятся одной строкой через запятую
pub fn split_colors(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    pub colors_text: RwSignal<String>,
    pub image_url: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(product: Option<&Product>) -> Self {
        let form = product.map(ProductDto::from).unwrap_or_else(ProductDto::new_for_insert);
        Self {
            colors_text: RwSignal::new(form.colors.join(", ")),
            form: RwSignal::new(form),
            image_url: RwSignal::new(product.and_then(|p| p.image_url.clone())),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            uploading: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(ProductDto::is_edit_mode)
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut dto = self.form.get_untracked();
        dto.colors = split_colors(&self.colors_text.get_untracked());
        if let Err(e) = dto.validate() {
            self.error.set(Some(e.to_string()));
            return;
        }

        let vm = *self;
        vm.saving.set(true);
        spawn_local(async move {
            match model::save_form(&dto).await {
                Ok(()) => {
                    log::info!("Producto guardado: {}", dto.name);
                    on_saved.run(());
                }
                Err(e) => vm.error.set(Some(format!("No se pudo guardar: {}", e))),
            }
            vm.saving.set(false);
        });
    }

    pub fn upload_command(&self, file: web_sys::File) {
        let Some(id) = self.form.with_untracked(|f| f.id) else {
            return;
        };
        let vm = *self;
        vm.uploading.set(true);
        spawn_local(async move {
            match model::upload_image(id, &file).await {
                Ok(product) => vm.image_url.set(product.image_url),
                Err(e) => vm.error.set(Some(format!("No se pudo subir la imagen: {}", e))),
            }
            vm.uploading.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_colors() {
        assert_eq!(split_colors(" Rojo, Blanco ,,Rosado "), vec!["Rojo", "Blanco", "Rosado"]);
        assert!(split_colors("  ").is_empty());
    }
}
