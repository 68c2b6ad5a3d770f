use super::*;
use crate::config::ContactConfig;

#[component]
pub(super) fn ContactPanel(
    runtime: StorefrontRuntimeContext,
    contact: &'static ContactConfig,
) -> impl IntoView {
    let whatsapp_url = contact.whatsapp_url();
    let mailto_url = contact.mailto_url();
    let back = Callback::new(move |_| runtime.dispatch_action(CatalogAction::ResetToAll));

    view! {
        <Stack layout_class="contact-section" ui_slot="contact">
            <Heading>"📞 Hubungi Kami"</Heading>
            <div class="contact-grid">
                <Card layout_class="contact-card" ui_slot="whatsapp">
                    <h3>"📱 WhatsApp"</h3>
                    <Text tone=TextTone::Secondary>"Chat langsung untuk pemesanan"</Text>
                    <LinkButton href=whatsapp_url new_tab=true ui_slot="whatsapp-link">
                        "💬 Chat Sekarang"
                    </LinkButton>
                </Card>
                <Card layout_class="contact-card" ui_slot="email">
                    <h3>"📧 Email"</h3>
                    <Text tone=TextTone::Secondary>{contact.email.clone()}</Text>
                    <LinkButton href=mailto_url ui_slot="email-link">
                        "✉️ Kirim Email"
                    </LinkButton>
                </Card>
            </div>
            <Card layout_class="shipping-info" ui_slot="shipping">
                <h3>"🚚 Informasi Pengiriman"</h3>
                <ul>
                    {contact
                        .shipping_notes
                        .iter()
                        .map(|note| view! { <li>{note.clone()}</li> })
                        .collect_view()}
                </ul>
            </Card>
            <Button variant=ButtonVariant::Primary ui_slot="back-to-catalog" on_click=back>
                "📚 Kembali ke Katalog"
            </Button>
        </Stack>
    }
}
